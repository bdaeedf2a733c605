use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use log::{debug, trace};
use rayon::prelude::*;

use crate::angles;
use crate::ephemeris::{Ephemeris, SpaEphemeris};
use crate::error::{Result, SundialError};
use crate::types::{Analemma, AnalemmaConfig, GeoCoordinate, ProjectedPoint};

/// Days swept per figure. Fixed at 365 even for leap reference years, so
/// the last calendar day of a leap year is never sampled.
pub const SAMPLE_DAYS: u32 = 365;

/// Wall-clock instant `day` days after `reference_year`-01-01 at `hour`:00.
///
/// The clock time is read as UTC with no time zone applied.
pub fn sample_instant(reference_year: i32, hour: u32, day: u32) -> Result<DateTime<Utc>> {
    if hour > 23 {
        return Err(SundialError::InvalidHour(hour));
    }
    let invalid = SundialError::InvalidDate {
        year: reference_year,
        day,
    };
    let start = NaiveDate::from_ymd_opt(reference_year, 1, 1)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .ok_or_else(|| invalid.clone())?;
    start
        .checked_add_signed(Duration::days(i64::from(day)))
        .map(|naive| naive.and_utc())
        .ok_or(invalid)
}

fn sample_day<E>(config: &AnalemmaConfig, ephemeris: &E, day: u32) -> Result<Option<ProjectedPoint>>
where
    E: Ephemeris + ?Sized,
{
    let instant = sample_instant(config.reference_year, config.hour, day)?;
    let sun = ephemeris.solar_angles(config.location, instant)?;
    let point = angles::project(sun, config.wall_orientation);
    if point.is_none() {
        trace!(
            "day {day}: sun behind wall (azimuth {:.2}°, orientation {:.1}°)",
            sun.azimuth,
            config.wall_orientation
        );
    }
    Ok(point)
}

fn log_sweep(config: &AnalemmaConfig, visible: usize) {
    debug!(
        "analemma {:02}:00 orientation {:.1}° at ({:.4}, {:.4}): {} visible, {} skipped",
        config.hour,
        config.wall_orientation,
        config.location.latitude,
        config.location.longitude,
        visible,
        SAMPLE_DAYS as usize - visible
    );
}

/// Sweeps one year at `config.hour`, keeping the days the Sun faces the wall.
///
/// Any ephemeris failure aborts the sweep.
pub fn generate_analemma<E>(config: &AnalemmaConfig, ephemeris: &E) -> Result<Analemma>
where
    E: Ephemeris + ?Sized,
{
    let mut points = Vec::with_capacity(SAMPLE_DAYS as usize);
    for day in 0..SAMPLE_DAYS {
        if let Some(point) = sample_day(config, ephemeris, day)? {
            points.push(point);
        }
    }
    log_sweep(config, points.len());
    Ok(Analemma {
        config: *config,
        points,
    })
}

/// Same sweep as [`generate_analemma`], spread over the rayon pool.
pub fn generate_analemma_par<E>(config: &AnalemmaConfig, ephemeris: &E) -> Result<Analemma>
where
    E: Ephemeris + Sync + ?Sized,
{
    let samples: Vec<Option<ProjectedPoint>> = (0..SAMPLE_DAYS)
        .into_par_iter()
        .map(|day| sample_day(config, ephemeris, day))
        .collect::<Result<Vec<_>>>()?;
    let points: Vec<ProjectedPoint> = samples.into_iter().flatten().collect();
    log_sweep(config, points.len());
    Ok(Analemma {
        config: *config,
        points,
    })
}

pub fn yearly_analemma<E>(
    hour: u32,
    wall_orientation: f64,
    location: GeoCoordinate,
    reference_year: i32,
    ephemeris: &E,
) -> Result<Vec<ProjectedPoint>>
where
    E: Ephemeris + ?Sized,
{
    let config = AnalemmaConfig {
        hour,
        wall_orientation,
        location,
        reference_year,
    };
    generate_analemma(&config, ephemeris).map(|analemma| analemma.points)
}

/// Figure for the default location and reference year, using SPA.
pub fn yearly_analemma_default(hour: u32, wall_orientation: f64) -> Result<Vec<ProjectedPoint>> {
    let defaults = AnalemmaConfig::default();
    yearly_analemma(
        hour,
        wall_orientation,
        defaults.location,
        defaults.reference_year,
        &SpaEphemeris::default(),
    )
}

pub fn position_at<Tz, E>(
    instant: &DateTime<Tz>,
    wall_orientation: f64,
    location: GeoCoordinate,
    ephemeris: &E,
) -> Result<Option<ProjectedPoint>>
where
    Tz: TimeZone,
    E: Ephemeris + ?Sized,
{
    let sun = ephemeris.solar_angles(location, instant.with_timezone(&Utc))?;
    Ok(angles::project(sun, wall_orientation))
}

pub fn current_position<E>(
    wall_orientation: f64,
    location: GeoCoordinate,
    ephemeris: &E,
) -> Result<Option<ProjectedPoint>>
where
    E: Ephemeris + ?Sized,
{
    position_at(&Utc::now(), wall_orientation, location, ephemeris)
}

pub fn current_position_default(wall_orientation: f64) -> Result<Option<ProjectedPoint>> {
    current_position(wall_orientation, GeoCoordinate::NICE, &SpaEphemeris::default())
}
