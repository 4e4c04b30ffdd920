//! Zodiacal: wraparound-safe analytics on ecliptic longitudes
//!
//! Given positions of solar system bodies from any [`PositionProvider`], this
//! crate maps longitudes to zodiac signs, classifies direct and retrograde
//! motion, finds the shortest arc covering a group of bodies, and checks
//! conjunctions and eclipse conditions. All angle arithmetic goes through
//! [`coordinates`], which handles the 0°/360° seam.
//!
//! ```rust
//! use zodiacal::analysis::cluster;
//! use zodiacal::planetlib::{AnalyticOrbitModel, Body, PositionProvider};
//! use zodiacal::time::JulianDate;
//!
//! let model = AnalyticOrbitModel::default();
//! let at = JulianDate::from_calendar(2000, 1, 1.5).unwrap();
//! let batch = model.positions_at(&Body::CLASSICAL, at);
//! let group = cluster::analyze_results(&batch).unwrap();
//! assert!(group.is_complete());
//! ```

use thiserror::Error;

pub mod analysis;
pub mod constants;
pub mod coordinates;
pub mod planetlib;
pub mod time;
pub mod zodiac;

// Re-export commonly used types
pub use analysis::{ConjunctionEvaluator, Direction, MotionTracker};
pub use coordinates::{Arc, Longitude};
pub use planetlib::{Body, Position, PositionProvider, ProviderError};
pub use time::JulianDate;

/// Main error type for the zodiacal library
#[derive(Debug, Error)]
pub enum ZodiacalError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Time error: {0}")]
    Time(#[from] time::TimeError),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Samples must be strictly increasing in time: sample {index} at {current} follows {previous}")]
    NonMonotonicInput {
        index: usize,
        previous: JulianDate,
        current: JulianDate,
    },

    #[error("Non-finite longitude: {0}")]
    NonFiniteLongitude(String),

    #[error("Motion series mixes bodies: expected {expected}, found {found}")]
    MixedBodies { expected: Body, found: Body },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for zodiacal operations
pub type Result<T> = std::result::Result<T, ZodiacalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_convert() {
        let provider: ZodiacalError = ProviderError::UnknownBody(Body::Pluto).into();
        assert_eq!(provider.to_string(), "Provider error: Unknown body: Pluto");

        let time: ZodiacalError = time::JulianDate::from_calendar(2023, 0, 1.0).unwrap_err().into();
        assert!(matches!(time, ZodiacalError::Time(_)));
    }

    #[test]
    fn test_non_finite_longitude_message() {
        let err = zodiac::to_zodiac(Longitude::from_degrees(f64::NAN)).unwrap_err();
        assert_eq!(err.to_string(), "Non-finite longitude: NaN has no zodiac sign");
    }

    #[test]
    fn test_non_monotonic_message() {
        let err = ZodiacalError::NonMonotonicInput {
            index: 2,
            previous: JulianDate::new(3.0),
            current: JulianDate::new(1.0),
        };
        assert_eq!(
            err.to_string(),
            "Samples must be strictly increasing in time: sample 2 at JD 1.00000 follows JD 3.00000"
        );
    }
}
