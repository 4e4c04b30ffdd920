//! Conjunction and eclipse-likelihood between two bodies
//!
//! Two bodies are in conjunction when their longitudes are closer than a
//! threshold. A solar eclipse is only possible at a Sun-Moon conjunction with
//! the Moon near the ecliptic, so the check needs the second body's latitude.
//! A missing latitude is never taken as zero: the report leaves
//! `near_ecliptic` empty and does not call the eclipse likely.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONJUNCTION_DEG, DEFAULT_LATITUDE_DEG};
use crate::coordinates::separation;
use crate::planetlib::Position;
use crate::{Result, ZodiacalError};

/// Limits for the conjunction and near-ecliptic tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConjunctionThresholds {
    /// Longitude separation below which two bodies are in conjunction
    pub conjunction_deg: f64,
    /// Absolute latitude below which a body is near the ecliptic
    pub latitude_deg: f64,
}

impl Default for ConjunctionThresholds {
    fn default() -> Self {
        Self {
            conjunction_deg: DEFAULT_CONJUNCTION_DEG,
            latitude_deg: DEFAULT_LATITUDE_DEG,
        }
    }
}

impl ConjunctionThresholds {
    /// Checks that both limits are positive and finite
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("conjunction_deg", self.conjunction_deg),
            ("latitude_deg", self.latitude_deg),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ZodiacalError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of a conjunction check
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConjunctionReport {
    /// Shortest longitude arc between the bodies, in `[0, 180]`
    pub separation: f64,
    pub is_conjunction: bool,
    /// `None` when either latitude is unknown
    pub near_ecliptic: Option<bool>,
    pub eclipse_likely: bool,
}

/// Evaluates pairs of positions against fixed thresholds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConjunctionEvaluator {
    thresholds: ConjunctionThresholds,
}

impl ConjunctionEvaluator {
    /// Create an evaluator with validated thresholds
    pub fn new(thresholds: ConjunctionThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> ConjunctionThresholds {
        self.thresholds
    }

    /// Compare `a` with `b`; the latitude test applies to `b`
    ///
    /// For an eclipse check pass the Sun as `a` and the Moon as `b`.
    pub fn evaluate(&self, a: &Position, b: &Position) -> ConjunctionReport {
        if a.at != b.at {
            warn!(
                "Comparing {} at {} with {} at {}; positions are not simultaneous",
                a.body, a.at, b.body, b.at
            );
        }
        evaluate(
            a,
            b,
            self.thresholds.conjunction_deg,
            self.thresholds.latitude_deg,
        )
    }
}

/// Conjunction check with explicit thresholds
pub fn evaluate(
    a: &Position,
    b: &Position,
    conjunction_threshold_deg: f64,
    latitude_threshold_deg: f64,
) -> ConjunctionReport {
    let separation = separation(a.longitude, b.longitude);
    let is_conjunction = separation < conjunction_threshold_deg;
    let near_ecliptic = match (a.latitude, b.latitude) {
        (Some(_), Some(lat_b)) => Some(lat_b.abs() < latitude_threshold_deg),
        _ => None,
    };

    ConjunctionReport {
        separation,
        is_conjunction,
        near_ecliptic,
        eclipse_likely: is_conjunction && near_ecliptic == Some(true),
    }
}
