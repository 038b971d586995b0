//! Shared numerical constants
//!
//! Components compare against [`ZERO`] rather than `0.0` when deciding whether a
//! pool or flux is large enough to act on.

use crate::FloatValue;

/// π
pub const PI: FloatValue = std::f64::consts::PI;

/// Magnitude at or below which a pool, flux or moisture value is treated as empty.
pub const ZERO: FloatValue = 1e-8;
