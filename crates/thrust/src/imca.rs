//! IMCA M 140 power-to-force relationship. Includes thruster losses.
//!
//! Each thruster class carries an empirical multiplier in kN per metric
//! horsepower (scaled by 10⁻³); the conversion factor is that multiplier
//! times the hp-per-kW constant and standard gravity. Ahead and astern
//! directions use independent factors, so asymmetric thrusters (azimuth,
//! propeller, waterjet) are represented directly.

use marcyb_units::constants::{METRIC_HP_PER_KW, STANDARD_GRAVITY_M_S2};

use crate::{Direction, MaxThrust, PowerRating, PowerToForceError, ThrusterType, checked_power};

// Empirical multipliers from IMCA M 140, in kN per metric hp.
const TUNNEL_MULTIPLIER: f64 = 11.0e-3;
const AZIMUTH_AHEAD_MULTIPLIER: f64 = 13.0e-3;
const AZIMUTH_ASTERN_MULTIPLIER: f64 = 8.0e-3;
const PROPELLER_MULTIPLIER: f64 = 13.0e-3;
const PROPELLER_ASTERN_RATIO: f64 = 0.7;
const WATERJET_MULTIPLIER: f64 = 8.0e-3;

/// Conversion factors for one thruster class, in kN per kW.
///
/// The negative factor is zero or negative; applying it to the (non-negative)
/// astern power rating yields a signed astern force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImcaFactors {
    pub positive_kn_per_kw: f64,
    pub negative_kn_per_kw: f64,
}

#[inline]
fn factor(multiplier: f64) -> f64 {
    multiplier * METRIC_HP_PER_KW * STANDARD_GRAVITY_M_S2
}

/// Conversion factors for the given thruster class.
///
/// Tunnel thrusters mirror their ahead factor astern; azimuth thrusters lose
/// thrust astern; propellers deliver 70% of their ahead factor astern;
/// waterjets have no reverse thrust at all.
pub fn conversion_factors(thruster_type: ThrusterType) -> ImcaFactors {
    match thruster_type {
        ThrusterType::Tunnel => ImcaFactors {
            positive_kn_per_kw: factor(TUNNEL_MULTIPLIER),
            negative_kn_per_kw: -factor(TUNNEL_MULTIPLIER),
        },
        ThrusterType::Azimuth => ImcaFactors {
            positive_kn_per_kw: factor(AZIMUTH_AHEAD_MULTIPLIER),
            negative_kn_per_kw: -factor(AZIMUTH_ASTERN_MULTIPLIER),
        },
        ThrusterType::Propeller => {
            let ahead = factor(PROPELLER_MULTIPLIER);
            ImcaFactors {
                positive_kn_per_kw: ahead,
                negative_kn_per_kw: -PROPELLER_ASTERN_RATIO * ahead,
            }
        }
        ThrusterType::Waterjet => ImcaFactors {
            positive_kn_per_kw: factor(WATERJET_MULTIPLIER),
            negative_kn_per_kw: 0.0,
        },
    }
}

/// Maximum force a thruster can apply given its rated power, per IMCA M 140.
///
/// Each direction is the product of its rated power and its conversion
/// factor; the two directions are independent magnitudes, not one signed
/// scalar. Rated powers must be finite and non-negative.
pub fn power_to_force(
    thruster_type: ThrusterType,
    rating: &PowerRating,
) -> Result<MaxThrust, PowerToForceError> {
    let positive_kw = checked_power(Direction::Positive, rating.positive_kw)?;
    let negative_kw = checked_power(Direction::Negative, rating.negative_kw)?;
    let factors = conversion_factors(thruster_type);
    Ok(MaxThrust {
        positive_kn: factors.positive_kn_per_kw * positive_kw,
        negative_kn: factors.negative_kn_per_kw * negative_kw,
    })
}
