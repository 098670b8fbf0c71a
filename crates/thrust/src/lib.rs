//! Thruster power-to-force relationships from two published DP standards.
//!
//! [`imca`] implements the IMCA M 140 relationship, which folds thruster
//! losses into category-specific factors; [`abs_guide`] implements the
//! relationship from the ABS Guide for Dynamic Positioning Systems, which
//! depends only on propeller diameter and ducting and excludes losses.
//! Both converters are pure and stateless: identical inputs produce
//! bit-identical outputs, and concurrent callers need no coordination.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod abs_guide;
pub mod imca;

pub use imca::ImcaFactors;

/// Thruster mounting/drive classification used by the IMCA relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThrusterType {
    Tunnel,
    Azimuth,
    Propeller,
    Waterjet,
}

/// Rated maximum delivered power per direction, in kW.
///
/// Both fields are magnitudes; the direction is carried by the field, never
/// by the sign of the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerRating {
    pub positive_kw: f64,
    pub negative_kw: f64,
}

/// Propeller geometry consumed by the ABS relationship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrusterGeometry {
    pub diameter_m: f64,
    pub ducted: bool,
}

/// Maximum force per direction, in kN.
///
/// The IMCA path signs `negative_kn` through its negative conversion factor;
/// the ABS path applies one unsigned formula to both directions and so
/// reports a magnitude there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaxThrust {
    pub positive_kn: f64,
    pub negative_kn: f64,
}

/// Thrust direction, used to report which power input failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Positive => f.write_str("positive"),
            Direction::Negative => f.write_str("negative"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PowerToForceError {
    #[error("{direction}-direction rated power must be finite and non-negative, got {value_kw} kW")]
    InvalidPower { direction: Direction, value_kw: f64 },
    #[error("propeller diameter must be finite and positive, got {value_m} m")]
    InvalidDiameter { value_m: f64 },
}

/// Reject negative or non-finite rated power before it reaches a formula.
pub(crate) fn checked_power(direction: Direction, value_kw: f64) -> Result<f64, PowerToForceError> {
    if !value_kw.is_finite() || value_kw < 0.0 {
        return Err(PowerToForceError::InvalidPower { direction, value_kw });
    }
    Ok(value_kw)
}
