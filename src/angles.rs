use crate::types::{ProjectedPoint, SolarAngles};

/// Azimuth of a south-facing wall normal, clockwise from north.
pub const SOUTH_AZIMUTH: f64 = 180.0;
/// Widest azimuth offset from the wall normal at which the Sun still lights the face.
pub const MAX_VISIBLE_OFFSET: f64 = 90.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Signed azimuth of the Sun measured from the wall normal.
///
/// Not wrapped: an azimuth of 10° against a south wall gives -170°, which
/// lands outside the visible band as it should.
pub fn azimuth_from_wall_normal(azimuth: f64, wall_orientation: f64) -> f64 {
    azimuth - (SOUTH_AZIMUTH + wall_orientation)
}

/// Closed interval: the grazing edges at exactly ±90° count as visible.
pub fn is_in_front_of_wall(offset: f64) -> bool {
    (-MAX_VISIBLE_OFFSET..=MAX_VISIBLE_OFFSET).contains(&offset)
}

/// Projects the Sun onto a vertical wall turned `wall_orientation` degrees from south.
///
/// Returns `None` when the Sun is behind the wall. Near grazing incidence
/// the coordinates grow without bound. A NaN altitude comes through as a
/// NaN `y`; a NaN azimuth fails the visibility test.
pub fn project(angles: SolarAngles, wall_orientation: f64) -> Option<ProjectedPoint> {
    let offset = azimuth_from_wall_normal(angles.azimuth, wall_orientation);
    if !is_in_front_of_wall(offset) {
        return None;
    }
    let offset_rad = deg_to_rad(offset);
    let alt_rad = deg_to_rad(angles.altitude);
    Some(ProjectedPoint {
        x: offset_rad.tan(),
        y: alt_rad.tan() / offset_rad.cos(),
    })
}
