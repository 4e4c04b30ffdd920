//! # Ecliptic Longitude Module
//!
//! This module provides the wraparound-safe primitives every other part of the
//! crate is built on.
//!
//! ## Storage
//!
//! A [`Longitude`] is always stored normalized to `[0, 360)` degrees. The raw
//! value can only enter through [`normalize`], so a stored longitude never
//! carries a full-turn ambiguity. Non-finite input stays non-finite; the
//! analyses reject such a longitude instead of classifying or mapping it.
//!
//! ## Differences
//!
//! Longitudes must never be subtracted directly: 359° and 1° are 2° apart, not
//! 358°. [`signed_delta`] returns the shortest signed rotation in `(-180, 180]`.
//! An exactly antipodal pair always reports `+180`, in both argument orders,
//! so classification never flips sign at the half-circle.
//!
//! ## Examples
//!
//! ```rust
//! use zodiacal::coordinates::angle::{signed_delta, Longitude};
//!
//! let a = Longitude::from_degrees(359.0);
//! let b = Longitude::from_degrees(361.0);
//! assert_eq!(b.degrees(), 1.0);
//! assert_eq!(signed_delta(a, b), 2.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FULL_CIRCLE, HALF_CIRCLE};

/// Reduces any real degree value into `[0, 360)`
///
/// Non-finite input yields `NaN`.
pub fn normalize(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(FULL_CIRCLE);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if reduced >= FULL_CIRCLE {
        0.0
    } else {
        reduced
    }
}

/// Shortest signed rotation from `from` to `to`, in `(-180, 180]`
///
/// Positive values mean increasing longitude (prograde). The antipodal case
/// is always `+180`, so `signed_delta(a, b) == -signed_delta(b, a)` holds for
/// every pair except exactly opposite points.
pub fn signed_delta(from: Longitude, to: Longitude) -> f64 {
    signed_delta_degrees(from.0, to.0)
}

/// [`signed_delta`] on raw degree values, normalizing both first
pub fn signed_delta_degrees(from: f64, to: f64) -> f64 {
    let forward = normalize(to - from);
    if forward > HALF_CIRCLE {
        forward - FULL_CIRCLE
    } else {
        forward
    }
}

/// Unsigned shortest arc between two longitudes, in `[0, 180]`
pub fn separation(a: Longitude, b: Longitude) -> f64 {
    signed_delta(a, b).abs()
}

/// An ecliptic longitude normalized to `[0, 360)` degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Longitude(f64);

impl Longitude {
    /// Creates a longitude from any degree value, wrapping it into `[0, 360)`
    pub fn from_degrees(degrees: f64) -> Self {
        Longitude(normalize(degrees))
    }

    /// Returns the longitude in degrees, always within `[0, 360)`
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Returns the longitude in radians
    pub fn radians(&self) -> f64 {
        self.0.to_radians()
    }

    /// Rotates the longitude by `degrees`, wrapping the result
    pub fn rotated(&self, degrees: f64) -> Self {
        Longitude::from_degrees(self.0 + degrees)
    }

    /// Whether the stored value is a real number
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Longitude {
    fn from(degrees: f64) -> Self {
        Longitude::from_degrees(degrees)
    }
}

impl From<Longitude> for f64 {
    fn from(lon: Longitude) -> Self {
        lon.0
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0)
    }
}
