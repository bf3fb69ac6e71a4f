// src/geometry/plane.rs

use std::f64::consts::PI;
use crate::geometry::round2;

/// base * height
pub fn rectangle_area(base: f64, height: f64) -> f64 {
    base * height
}

/// 2 * (base + height)
pub fn rectangle_perimeter(base: f64, height: f64) -> f64 {
    2.0 * (base + height)
}

/// pi * r^2, to two decimals. Zero for a non-positive radius.
pub fn circle_area(radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    round2(PI * radius * radius)
}

/// 2 * pi * r
pub fn circle_circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// base * height / 2
pub fn triangle_area(base: f64, height: f64) -> f64 {
    (base * height) / 2.0
}

pub fn triangle_perimeter(side1: f64, side2: f64, side3: f64) -> f64 {
    side1 + side2 + side3
}

/// Triangle inequality over three positive side lengths.
pub fn is_valid_triangle(side1: f64, side2: f64, side3: f64) -> bool {
    if side1 <= 0.0 || side2 <= 0.0 || side3 <= 0.0 {
        return false;
    }
    side1 + side2 > side3 && side1 + side3 > side2 && side2 + side3 > side1
}

/// (major + minor) / 2 * height
pub fn trapezoid_area(major_base: f64, minor_base: f64, height: f64) -> f64 {
    ((major_base + minor_base) / 2.0) * height
}

/// d1 * d2 / 2
pub fn rhombus_area(major_diagonal: f64, minor_diagonal: f64) -> f64 {
    (major_diagonal * minor_diagonal) / 2.0
}

/// Area of a regular pentagon from side and apothem, to two decimals.
/// Zero for a non-positive apothem.
pub fn regular_pentagon_area(side: f64, apothem: f64) -> f64 {
    if apothem <= 0.0 {
        return 0.0;
    }
    round2((5.0 * side * apothem) / 2.0)
}

pub fn regular_pentagon_perimeter(side: f64) -> f64 {
    5.0 * side
}

/// Area of a regular hexagon from side and apothem, to two decimals.
/// Zero for a non-positive apothem.
pub fn regular_hexagon_area(side: f64, apothem: f64) -> f64 {
    if apothem <= 0.0 {
        return 0.0;
    }
    round2((6.0 * side * apothem) / 2.0)
}

/// 6 * side. Zero for a non-positive side.
pub fn regular_hexagon_perimeter(side: f64) -> f64 {
    if side <= 0.0 {
        return 0.0;
    }
    6.0 * side
}

/// Area of a regular n-gon from side count, side, and apothem, to two
/// decimals.
pub fn regular_polygon_area(sides: u32, side: f64, apothem: f64) -> f64 {
    round2(((sides as f64 * side) * apothem) / 2.0)
}

pub fn regular_polygon_perimeter(sides: u32, side: f64) -> f64 {
    sides as f64 * side
}
