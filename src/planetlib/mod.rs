//! Solar system bodies, their positions, and the providers that supply them
//!
//! A [`PositionProvider`] answers one question: where was a body on the
//! ecliptic at an instant. Every call is independent and fails per item, so a
//! caller querying many bodies or instants gets a result for each and
//! unaffected items still complete. A failure is always an explicit
//! [`ProviderError`], never a zero position.

pub mod analytic;
pub mod names;
pub mod table;

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coordinates::Longitude;
use crate::time::JulianDate;
use crate::zodiac::{to_zodiac, ZodiacPosition};

pub use analytic::{AnalyticOrbitModel, MeanElements, OrbitModelConfig};
pub use names::ParseBodyError;
pub use table::PositionTable;

/// Error type for position lookups
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("Unknown body: {0}")]
    UnknownBody(Body),

    #[error("Position of {body} unavailable at {at}: {reason}")]
    Unavailable {
        body: Body,
        at: JulianDate,
        reason: String,
    },
}

/// Outcome of a single position lookup
pub type ProviderResult = std::result::Result<Position, ProviderError>;

/// Enum representing the solar system bodies seen from Earth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// The seven bodies visible to the naked eye, in traditional order
    pub const CLASSICAL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// JPL Horizons target code for the body
    pub fn horizons_id(&self) -> i32 {
        match self {
            Body::Sun => 10,
            Body::Moon => 301,
            Body::Mercury => 199,
            Body::Venus => 299,
            Body::Mars => 499,
            Body::Jupiter => 599,
            Body::Saturn => 699,
            Body::Uranus => 799,
            Body::Neptune => 899,
            Body::Pluto => 999,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a body was on the ecliptic at an instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub body: Body,
    pub at: JulianDate,
    pub longitude: Longitude,
    /// Ecliptic latitude in degrees, `None` when the provider cannot supply it
    pub latitude: Option<f64>,
}

impl Position {
    /// Create a new position record
    pub fn new(body: Body, at: JulianDate, longitude: Longitude, latitude: Option<f64>) -> Self {
        Self {
            body,
            at,
            longitude,
            latitude,
        }
    }

    /// The zodiac sign and offset of this position
    pub fn zodiac(&self) -> crate::Result<ZodiacPosition> {
        to_zodiac(self.longitude)
    }
}

/// A source of ecliptic positions
///
/// Implementations may be a live precise-ephemeris service, a table of
/// positions fetched from one, or the [`AnalyticOrbitModel`]. The analytics
/// never branch on which one produced a position.
pub trait PositionProvider {
    /// Position of `body` at `at`, or why it cannot be given
    fn position_of(&self, body: Body, at: JulianDate) -> ProviderResult;

    /// Positions of several bodies at one instant, one result per body
    fn positions_at(&self, bodies: &[Body], at: JulianDate) -> Vec<(Body, ProviderResult)> {
        bodies
            .iter()
            .map(|&body| {
                let result = self.position_of(body, at);
                if let Err(e) = &result {
                    debug!("Skipping {} at {}: {}", body, at, e);
                }
                (body, result)
            })
            .collect()
    }

    /// Positions of one body over a run of instants, one result per instant
    fn series(&self, body: Body, instants: &[JulianDate]) -> Vec<ProviderResult> {
        instants
            .iter()
            .map(|&at| {
                let result = self.position_of(body, at);
                if let Err(e) = &result {
                    debug!("Skipping {} at {}: {}", body, at, e);
                }
                result
            })
            .collect()
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn position_of(&self, body: Body, at: JulianDate) -> ProviderResult {
        (**self).position_of(body, at)
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for Box<P> {
    fn position_of(&self, body: Body, at: JulianDate) -> ProviderResult {
        (**self).position_of(body, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider that knows only the Sun, fixed at 100°
    struct SunOnly;

    impl PositionProvider for SunOnly {
        fn position_of(&self, body: Body, at: JulianDate) -> ProviderResult {
            match body {
                Body::Sun => Ok(Position::new(body, at, Longitude::from_degrees(100.0), Some(0.0))),
                other => Err(ProviderError::UnknownBody(other)),
            }
        }
    }

    #[test]
    fn test_batch_does_not_abort_on_failure() {
        let results = SunOnly.positions_at(&Body::CLASSICAL, JulianDate::J2000);
        assert_eq!(results.len(), 7);
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].1, Err(ProviderError::UnknownBody(Body::Moon)));
        assert!(results.iter().skip(1).all(|(_, r)| r.is_err()));
    }

    #[test]
    fn test_series_keeps_order() {
        let instants = [JulianDate::new(1.0), JulianDate::new(2.0), JulianDate::new(3.0)];
        let provider: Box<dyn PositionProvider> = Box::new(SunOnly);
        let series = provider.series(Body::Sun, &instants);
        let times: Vec<f64> = series.iter().map(|r| r.as_ref().unwrap().at.jd()).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_body_names_and_ids() {
        assert_eq!(Body::Mars.to_string(), "Mars");
        assert_eq!(Body::Moon.horizons_id(), 301);
        assert_eq!(Body::CLASSICAL.len(), 7);
    }

    #[test]
    fn test_position_zodiac() {
        let pos = Position::new(Body::Saturn, JulianDate::J2000, Longitude::from_degrees(47.5), None);
        assert_eq!(pos.zodiac().unwrap().to_string(), "Taurus 17.5°");
    }
}
