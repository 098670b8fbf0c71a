//! Shared constants and unit helpers for the marine capability workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Gravitational acceleration used by the IMCA M 140 relationship (m/s²).
    ///
    /// The standard rounds to two decimals rather than using the CODATA
    /// 9.80665 value; keep its rounding so forces match the published tables.
    pub const STANDARD_GRAVITY_M_S2: f64 = 9.81;
    /// Metric horsepower per kilowatt.
    pub const METRIC_HP_PER_KW: f64 = 1.36332;
}

use crate::constants::METRIC_HP_PER_KW;

/// Convert kilowatts to metric horsepower.
#[inline]
pub fn kw_to_metric_hp(v: f64) -> f64 {
    v * METRIC_HP_PER_KW
}

/// Convert metric horsepower to kilowatts.
#[inline]
pub fn metric_hp_to_kw(v: f64) -> f64 {
    v / METRIC_HP_PER_KW
}

/// Convert kilonewtons to newtons.
#[inline]
pub fn kn_to_n(v: f64) -> f64 {
    v * 1_000.0
}

/// Convert newtons to kilonewtons.
#[inline]
pub fn n_to_kn(v: f64) -> f64 {
    v / 1_000.0
}
