//! ABS power-to-force relationship, from the ABS Guide for Dynamic
//! Positioning Systems. Excludes thruster losses.

use crate::{Direction, MaxThrust, PowerRating, PowerToForceError, ThrusterGeometry, checked_power};

/// Empirical constant for ducted propellers.
pub const K_DUCTED: f64 = 1250.0;
/// Empirical constant for open (unducted) propellers.
pub const K_OPEN: f64 = 848.0;

/// Maximum force a thruster can apply given its rated power and geometry.
///
/// `force_kn = K * (power_kw * diameter_m)^(2/3) / 1000`, with `K` chosen by
/// the ducted flag. The same formula applies to both directions, so the
/// astern result is a magnitude rather than a signed value. Rated powers
/// must be finite and non-negative and the diameter finite and positive;
/// the fractional exponent never sees a negative base.
pub fn power_to_force(
    rating: &PowerRating,
    geometry: &ThrusterGeometry,
) -> Result<MaxThrust, PowerToForceError> {
    let positive_kw = checked_power(Direction::Positive, rating.positive_kw)?;
    let negative_kw = checked_power(Direction::Negative, rating.negative_kw)?;
    let diameter_m = geometry.diameter_m;
    if !diameter_m.is_finite() || diameter_m <= 0.0 {
        return Err(PowerToForceError::InvalidDiameter { value_m: diameter_m });
    }

    let k = if geometry.ducted { K_DUCTED } else { K_OPEN };
    let force_kn = |power_kw: f64| k * (power_kw * diameter_m).powf(2.0 / 3.0) / 1_000.0;

    Ok(MaxThrust {
        positive_kn: force_kn(positive_kw),
        negative_kn: force_kn(negative_kw),
    })
}
