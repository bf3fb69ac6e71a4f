// src/geometry/solid.rs

use std::f64::consts::PI;
use crate::geometry::round2;

/// side^3
pub fn cube_volume(side: f64) -> f64 {
    side * side * side
}

/// 6 * side^2, to two decimals. Zero for a non-positive side.
pub fn cube_surface_area(side: f64) -> f64 {
    if side <= 0.0 {
        return 0.0;
    }
    round2(6.0 * side * side)
}

/// 4/3 * pi * r^3, to two decimals. Zero for a non-positive radius.
pub fn sphere_volume(radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    round2((4.0 / 3.0) * PI * radius.powi(3))
}

/// 4 * pi * r^2, to two decimals. Zero for a non-positive radius.
pub fn sphere_surface_area(radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    round2(4.0 * PI * radius * radius)
}

/// pi * h * r^2, to two decimals. Zero if radius or height is
/// non-positive.
pub fn cylinder_volume(radius: f64, height: f64) -> f64 {
    if radius <= 0.0 || height <= 0.0 {
        return 0.0;
    }
    round2(PI * height * radius * radius)
}

/// Lateral surface plus both caps, to two decimals. Zero for a
/// non-positive radius; a non-positive height leaves only the caps.
pub fn cylinder_surface_area(radius: f64, height: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    if height <= 0.0 {
        return round2(2.0 * PI * radius * radius);
    }
    round2(2.0 * PI * radius * height + 2.0 * PI * radius * radius)
}
