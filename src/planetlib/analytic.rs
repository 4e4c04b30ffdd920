//! First-order analytic orbit model
//!
//! Each body's longitude is propagated linearly from a reference epoch:
//!
//! ```text
//! T         = (t - epoch) / 36525          Julian centuries
//! longitude = normalize(L0 + n * T)
//! ```
//!
//! where `L0` is the mean longitude at the epoch and `n` the mean motion in
//! degrees per Julian century. This ignores eccentricity, perturbations and
//! the geocentric parallax of the planets, so it gives mean longitudes only
//! and cannot estimate latitude. It works for any date, which makes it the
//! fallback when a precise ephemeris has no coverage.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Body, Position, PositionProvider, ProviderError, ProviderResult};
use crate::coordinates::Longitude;
use crate::time::JulianDate;
use crate::{Result, ZodiacalError};

/// Linear mean-longitude elements for one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanElements {
    /// Mean longitude at the model epoch, in degrees
    pub reference_longitude_deg: f64,
    /// Mean motion in degrees per Julian century
    pub mean_motion_deg_per_century: f64,
}

impl MeanElements {
    pub const fn new(reference_longitude_deg: f64, mean_motion_deg_per_century: f64) -> Self {
        Self {
            reference_longitude_deg,
            mean_motion_deg_per_century,
        }
    }

    /// Mean longitude `centuries` Julian centuries after the epoch
    pub fn longitude_at(&self, centuries: f64) -> Longitude {
        Longitude::from_degrees(
            self.reference_longitude_deg + self.mean_motion_deg_per_century * centuries,
        )
    }
}

/// Constants for an [`AnalyticOrbitModel`]
///
/// Configuration is an ordinary value, so models with different epochs or
/// element sets can coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitModelConfig {
    /// Instant at which the reference longitudes hold
    pub epoch: JulianDate,
    /// Elements for every body the model can place
    pub elements: BTreeMap<Body, MeanElements>,
}

impl OrbitModelConfig {
    /// Create a configuration with no bodies
    pub fn new(epoch: JulianDate) -> Self {
        Self {
            epoch,
            elements: BTreeMap::new(),
        }
    }

    /// Mean longitudes of the seven classical bodies referred to J2000.0
    pub fn j2000_mean_longitudes() -> Self {
        Self::new(JulianDate::J2000)
            .with_body(Body::Sun, MeanElements::new(280.46646, 36000.76983))
            .with_body(Body::Moon, MeanElements::new(218.3165, 481267.8813))
            .with_body(Body::Mercury, MeanElements::new(252.2509, 149472.6746))
            .with_body(Body::Venus, MeanElements::new(181.9798, 58517.8157))
            .with_body(Body::Mars, MeanElements::new(355.4330, 19140.2993))
            .with_body(Body::Jupiter, MeanElements::new(34.3515, 3034.9057))
            .with_body(Body::Saturn, MeanElements::new(50.0774, 1222.1138))
    }

    /// Adds or replaces the elements for `body`
    pub fn with_body(mut self, body: Body, elements: MeanElements) -> Self {
        self.elements.insert(body, elements);
        self
    }

    /// Load a configuration from JSON and validate it
    ///
    /// ```rust
    /// use zodiacal::planetlib::{Body, OrbitModelConfig};
    ///
    /// let json = r#"{
    ///     "epoch": 2451545.0,
    ///     "elements": {
    ///         "Mars": { "reference_longitude_deg": 355.433, "mean_motion_deg_per_century": 19140.2993 }
    ///     }
    /// }"#;
    /// let config = OrbitModelConfig::from_json(json).unwrap();
    /// assert!(config.elements.contains_key(&Body::Mars));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: OrbitModelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the epoch and every constant are finite
    pub fn validate(&self) -> Result<()> {
        if !self.epoch.jd().is_finite() {
            return Err(ZodiacalError::Config(format!(
                "epoch {} is not finite",
                self.epoch.jd()
            )));
        }
        for (body, elements) in &self.elements {
            if !elements.reference_longitude_deg.is_finite()
                || !elements.mean_motion_deg_per_century.is_finite()
            {
                return Err(ZodiacalError::Config(format!(
                    "elements for {} must be finite, got {:?}",
                    body, elements
                )));
            }
        }
        Ok(())
    }

    /// Bodies the configuration has elements for
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.elements.keys().copied()
    }
}

impl Default for OrbitModelConfig {
    fn default() -> Self {
        Self::j2000_mean_longitudes()
    }
}

/// Position provider built on linear mean longitudes
#[derive(Debug, Clone)]
pub struct AnalyticOrbitModel {
    config: OrbitModelConfig,
}

impl AnalyticOrbitModel {
    /// Create a model from a validated configuration
    pub fn new(config: OrbitModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration the model was built from
    pub fn config(&self) -> &OrbitModelConfig {
        &self.config
    }

    /// Mean longitude of `body` at `at`
    pub fn mean_longitude(
        &self,
        body: Body,
        at: JulianDate,
    ) -> std::result::Result<Longitude, ProviderError> {
        let elements = self
            .config
            .elements
            .get(&body)
            .ok_or(ProviderError::UnknownBody(body))?;
        if !at.jd().is_finite() {
            return Err(ProviderError::Unavailable {
                body,
                at,
                reason: "instant is not a finite Julian date".to_string(),
            });
        }
        let centuries = at.julian_centuries_since(self.config.epoch);
        let longitude = elements.longitude_at(centuries);
        if !longitude.is_finite() {
            return Err(ProviderError::Unavailable {
                body,
                at,
                reason: "mean longitude overflows at this instant".to_string(),
            });
        }
        Ok(longitude)
    }
}

impl Default for AnalyticOrbitModel {
    fn default() -> Self {
        Self {
            config: OrbitModelConfig::default(),
        }
    }
}

impl PositionProvider for AnalyticOrbitModel {
    fn position_of(&self, body: Body, at: JulianDate) -> ProviderResult {
        let longitude = self.mean_longitude(body, at)?;
        debug!("Analytic position of {} at {}: {}", body, at, longitude);
        Ok(Position::new(body, at, longitude, None))
    }
}
