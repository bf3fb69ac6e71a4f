// src/geometry/mod.rs

pub mod coordinate;
pub mod plane;
pub mod solid;

/// Results quoted to two decimal places, the library's display precision
/// for derived measures.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
