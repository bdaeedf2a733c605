use thiserror::Error;

/// The solar-position backend could not resolve an instant or location.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EphemerisError {
    #[error("solar position computation failed: {0}")]
    Backend(#[from] solar_positioning::Error),

    #[error("delta T estimation failed: {0}")]
    DeltaT(solar_positioning::Error),

    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SundialError {
    #[error("hour {0} is outside 0..=23")]
    InvalidHour(u32),

    #[error("cannot build sample instant for day {day} of {year}")]
    InvalidDate { year: i32, day: u32 },

    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

pub type Result<T> = std::result::Result<T, SundialError>;
