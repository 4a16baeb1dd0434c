use std::f64::consts::PI;

pub const FULL_RADIAN: f64 = 2.0 * PI;
pub const QUARTER_RADIAN: f64 = PI / 2.0;

/// Returns the representative of `angle` (radians) within `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_RADIAN);
    // rem_euclid of a tiny negative value can round up to exactly 2π
    if wrapped >= FULL_RADIAN {
        0.0
    } else {
        wrapped
    }
}

pub fn degree_to_radian(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

pub fn radian_to_degree(radians: f64) -> f64 {
    radians * (180.0 / PI)
}
