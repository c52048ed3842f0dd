//! Percentage value object (0-100 scale).

use serde::Serialize;
use std::fmt;

/// A percentage between 0 and 100 inclusive.
///
/// Built from a fraction; anything outside `[0, 1]` (including NaN) is
/// clamped, so the value is always safe to use as a bar width.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a Percentage from a fraction, clamping into `[0, 100]`.
    pub fn from_fraction(fraction: f64) -> Self {
        let scaled = fraction * 100.0;
        if scaled.is_nan() {
            return Self::ZERO;
        }
        Self(scaled.clamp(0.0, 100.0))
    }

    /// Returns the value on the 0-100 scale.
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Formats a raw fraction as a one-decimal percentage without clamping.
///
/// `0.86` becomes `"86.0%"`, `1.4` becomes `"140.0%"`.
pub fn format_fraction(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
