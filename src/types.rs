use serde::{Deserialize, Serialize};

/// Observer location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Nice, France. The location the wall sundial was first laid out for.
    pub const NICE: GeoCoordinate = GeoCoordinate {
        latitude: 43.7102,
        longitude: 7.2620,
    };

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for GeoCoordinate {
    fn default() -> Self {
        Self::NICE
    }
}

/// Altitude above the horizon and azimuth clockwise from true north, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarAngles {
    pub altitude: f64,
    pub azimuth: f64,
}

/// Sun position on the wall plane, in tangent units at unit distance.
///
/// Coordinates diverge towards infinity at grazing incidence and are
/// deliberately left unclipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalemmaConfig {
    /// Clock hour sampled each day, 0..=23.
    pub hour: u32,
    /// Degrees from due south; negative faces east, positive faces west.
    pub wall_orientation: f64,
    pub location: GeoCoordinate,
    pub reference_year: i32,
}

impl Default for AnalemmaConfig {
    fn default() -> Self {
        Self {
            hour: 12,
            wall_orientation: 0.0,
            location: GeoCoordinate::NICE,
            reference_year: 2024,
        }
    }
}

/// Visible points of one annual sweep, in day-of-year order.
///
/// Days on which the Sun was behind the wall are absent, so an index into
/// `points` is not a day number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analemma {
    pub config: AnalemmaConfig,
    pub points: Vec<ProjectedPoint>,
}

impl Analemma {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectedPoint> {
        self.points.iter()
    }

    /// Splits the figure into separate x and y series.
    pub fn unzip(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }

    /// Points whose coordinates both lie within `[-limit, limit]`.
    pub fn within(&self, limit: f64) -> impl Iterator<Item = &ProjectedPoint> + '_ {
        self.points
            .iter()
            .filter(move |p| p.x.abs() <= limit && p.y.abs() <= limit)
    }
}

impl<'a> IntoIterator for &'a Analemma {
    type Item = &'a ProjectedPoint;
    type IntoIter = std::slice::Iter<'a, ProjectedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
