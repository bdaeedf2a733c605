use chrono::{DateTime, Utc};
use solar_positioning::time::DeltaT;
use solar_positioning::{spa, RefractionCorrection};

use crate::angles::normalize_angle;
use crate::error::EphemerisError;
use crate::types::{GeoCoordinate, SolarAngles};

/// Surface pressure (mbar) of the classic observer model.
pub const DEFAULT_PRESSURE: f64 = 1010.0;
/// Surface temperature (°C) of the classic observer model.
pub const DEFAULT_TEMPERATURE: f64 = 15.0;

/// Solar altitude and azimuth for an observer at a given instant.
pub trait Ephemeris {
    fn solar_angles(
        &self,
        location: GeoCoordinate,
        instant: DateTime<Utc>,
    ) -> Result<SolarAngles, EphemerisError>;
}

impl<F> Ephemeris for F
where
    F: Fn(GeoCoordinate, DateTime<Utc>) -> Result<SolarAngles, EphemerisError>,
{
    fn solar_angles(
        &self,
        location: GeoCoordinate,
        instant: DateTime<Utc>,
    ) -> Result<SolarAngles, EphemerisError> {
        self(location, instant)
    }
}

/// NREL Solar Position Algorithm backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaEphemeris {
    /// Observer elevation in metres.
    pub elevation: f64,
    pub refraction: Option<RefractionCorrection>,
}

impl SpaEphemeris {
    pub fn new(elevation: f64, refraction: Option<RefractionCorrection>) -> Self {
        Self {
            elevation,
            refraction,
        }
    }

    /// Sea-level observer reporting geometric (unrefracted) altitudes.
    pub fn without_refraction() -> Self {
        Self::new(0.0, None)
    }
}

impl Default for SpaEphemeris {
    fn default() -> Self {
        let refraction = RefractionCorrection::new(DEFAULT_PRESSURE, DEFAULT_TEMPERATURE).ok();
        Self::new(0.0, refraction)
    }
}

impl Ephemeris for SpaEphemeris {
    fn solar_angles(
        &self,
        location: GeoCoordinate,
        instant: DateTime<Utc>,
    ) -> Result<SolarAngles, EphemerisError> {
        let delta_t = DeltaT::estimate_from_date_like(instant).map_err(EphemerisError::DeltaT)?;
        let pos = spa::solar_position(
            instant,
            location.latitude,
            location.longitude,
            self.elevation,
            delta_t,
            self.refraction,
        )?;
        Ok(SolarAngles {
            altitude: pos.elevation_angle(),
            azimuth: normalize_angle(pos.azimuth()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_applies_refraction() {
        let spa = SpaEphemeris::default();
        let refraction = spa.refraction.unwrap();
        assert_eq!(refraction.pressure(), DEFAULT_PRESSURE);
        assert_eq!(refraction.temperature(), DEFAULT_TEMPERATURE);
        assert_eq!(spa.elevation, 0.0);
    }

    #[test]
    fn closures_are_adapters() {
        let fixed = |_: GeoCoordinate, _: DateTime<Utc>| {
            Ok::<_, EphemerisError>(SolarAngles {
                altitude: 12.0,
                azimuth: 200.0,
            })
        };
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let angles = fixed.solar_angles(GeoCoordinate::NICE, instant).unwrap();
        assert_eq!(angles.altitude, 12.0);
        assert_eq!(angles.azimuth, 200.0);
    }

    #[test]
    fn invalid_latitude_is_reported() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let err = SpaEphemeris::default()
            .solar_angles(GeoCoordinate::new(95.0, 0.0), instant)
            .unwrap_err();
        assert!(matches!(err, EphemerisError::Backend(_)));
    }
}
