use clap::Parser;

use wall_analemma::analemma::{current_position, generate_analemma};
use wall_analemma::ephemeris::SpaEphemeris;
use wall_analemma::types::{AnalemmaConfig, GeoCoordinate};

/// Print the analemma traced on a vertical sundial wall.
#[derive(Debug, Parser)]
struct Args {
    /// Clock hour sampled each day (0-23)
    #[arg(long, default_value_t = 12)]
    hour: u32,

    /// Wall orientation in degrees from south (negative = east, positive = west)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    orientation: f64,

    #[arg(long, default_value_t = GeoCoordinate::NICE.latitude, allow_negative_numbers = true)]
    latitude: f64,

    #[arg(long, default_value_t = GeoCoordinate::NICE.longitude, allow_negative_numbers = true)]
    longitude: f64,

    #[arg(long, default_value_t = 2024)]
    year: i32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = AnalemmaConfig {
        hour: args.hour,
        wall_orientation: args.orientation,
        location: GeoCoordinate::new(args.latitude, args.longitude),
        reference_year: args.year,
    };
    let spa = SpaEphemeris::default();
    let analemma = generate_analemma(&config, &spa)?;

    println!("=== Wall Sundial Analemma ===");
    println!(
        "Location: ({:.4}°, {:.4}°)",
        config.location.latitude, config.location.longitude
    );
    println!("Hour: {:02}:00 UTC, wall {:.1}° from south", config.hour, config.wall_orientation);
    println!("Visible days: {}", analemma.len());
    println!();
    for (i, p) in analemma.iter().enumerate() {
        println!("{:3}  x={:8.4}  y={:8.4}", i, p.x, p.y);
    }
    println!();

    match current_position(config.wall_orientation, config.location, &spa)? {
        Some(p) => println!("Sun now: x={:.2}, y={:.2}", p.x, p.y),
        None => println!("Sun now: behind the wall"),
    }
    Ok(())
}
