//! Wilson score interval around a class probability.

/// Pseudo sample size used when the model reports no interval of its own.
pub const DEFAULT_SAMPLE_SIZE: u32 = 100;

/// z-score for a two-sided 95% interval.
pub const Z_95: f64 = 1.96;

/// Lower and upper confidence limits, both within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lcl: f64,
    pub ucl: f64,
}

/// 95% Wilson score interval for probability `p` over `DEFAULT_SAMPLE_SIZE` trials.
pub fn wilson_interval(p: f64) -> ConfidenceInterval {
    wilson_interval_with(p, DEFAULT_SAMPLE_SIZE, Z_95)
}

/// Wilson score interval with explicit sample size and z-score.
pub fn wilson_interval_with(p: f64, n: u32, z: f64) -> ConfidenceInterval {
    let n = f64::from(n.max(1));
    let z2 = z * z;

    let denom = 1.0 + z2 / n;
    let center = (p + z2 / (2.0 * n)) / denom;
    let half = z * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt() / denom;

    ConfidenceInterval {
        lcl: (center - half).max(0.0),
        ucl: (center + half).min(1.0),
    }
}
