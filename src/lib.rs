pub mod analemma;
pub mod angles;
pub mod ephemeris;
pub mod error;
pub mod types;

pub use analemma::{
    current_position, current_position_default, generate_analemma, generate_analemma_par,
    position_at, sample_instant, yearly_analemma, yearly_analemma_default, SAMPLE_DAYS,
};

pub use angles::{
    azimuth_from_wall_normal, deg_to_rad, is_in_front_of_wall, normalize_angle, project,
    rad_to_deg, MAX_VISIBLE_OFFSET, SOUTH_AZIMUTH,
};

pub use ephemeris::{Ephemeris, SpaEphemeris, DEFAULT_PRESSURE, DEFAULT_TEMPERATURE};

pub use error::{EphemerisError, Result, SundialError};

pub use types::{Analemma, AnalemmaConfig, GeoCoordinate, ProjectedPoint, SolarAngles};
