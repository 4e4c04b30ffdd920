//! Direction of motion along the ecliptic
//!
//! Given one body's longitudes at increasing instants, each step is classified
//! by the shortest signed rotation between consecutive samples:
//!
//! - positive: [`Direction::Direct`]
//! - negative: [`Direction::Retrograde`]
//! - zero (within the tracker's tolerance): [`Direction::Stationary`]
//!
//! The first sample has nothing to compare against and is
//! [`Direction::Unknown`].
//!
//! # Sampling precondition
//!
//! The step between samples must be short enough that the body's true travel
//! stays under 180°. [`signed_delta`] can only see the shortest rotation, so a
//! coarser cadence silently aliases: the Moon sampled every 20 days appears to
//! move backwards. Choosing the cadence is the caller's job; a few days is
//! ample for the planets, the Moon needs less than about 13 days.

use log::trace;
use serde::Serialize;

use crate::coordinates::{signed_delta, Longitude};
use crate::planetlib::{Body, Position};
use crate::time::JulianDate;
use crate::{Result, ZodiacalError};

/// Apparent direction of motion over one sampling step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Longitude increasing
    Direct,
    /// Longitude decreasing
    Retrograde,
    /// No change in longitude
    Stationary,
    /// First sample of a sequence
    Unknown,
}

/// One sample of a motion sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionSample {
    pub at: JulianDate,
    pub longitude: Longitude,
    pub direction: Direction,
    /// Signed travel from the previous sample, `None` for the first
    pub delta_deg: Option<f64>,
}

/// Classifies chronological longitude samples by direction of motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTracker {
    stationary_tolerance_deg: f64,
}

impl Default for MotionTracker {
    fn default() -> Self {
        Self {
            stationary_tolerance_deg: 0.0,
        }
    }
}

impl MotionTracker {
    /// A tracker that calls a step stationary only when the longitude is unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat steps of at most `degrees` (either way) as stationary
    pub fn with_stationary_tolerance(mut self, degrees: f64) -> Self {
        self.stationary_tolerance_deg = if degrees.is_finite() { degrees.abs() } else { 0.0 };
        self
    }

    /// Direction for a signed step of `delta_deg`, which must be finite
    fn direction_of(&self, delta_deg: f64) -> Direction {
        if delta_deg.abs() <= self.stationary_tolerance_deg {
            Direction::Stationary
        } else if delta_deg > 0.0 {
            Direction::Direct
        } else {
            Direction::Retrograde
        }
    }

    /// Classify `samples`, which must be strictly increasing in time
    ///
    /// Ordering and finite longitudes are checked up front; the classification itself is lazy and
    /// yields one [`MotionSample`] per input, in input order. The returned
    /// iterator can be replayed with [`MotionSamples::restart`].
    pub fn classify<'a>(&self, samples: &'a [(JulianDate, Longitude)]) -> Result<MotionSamples<'a>> {
        check_chronological(samples.iter().map(|(at, _)| *at))?;
        let non_finite = samples.iter().enumerate().find(|(_, (_, lon))| !lon.is_finite());
        if let Some((index, (at, lon))) = non_finite {
            return Err(ZodiacalError::NonFiniteLongitude(format!(
                "sample {} at {} has longitude {}",
                index,
                at,
                lon.degrees()
            )));
        }
        Ok(MotionSamples {
            tracker: *self,
            samples,
            index: 0,
        })
    }

    /// Classify a chronological run of positions of one body
    pub fn classify_positions(&self, positions: &[Position]) -> Result<MotionSeries> {
        let body = positions.first().map(|p| p.body);
        if let Some(expected) = body {
            if let Some(other) = positions.iter().find(|p| p.body != expected) {
                return Err(ZodiacalError::MixedBodies {
                    expected,
                    found: other.body,
                });
            }
        }

        let pairs: Vec<(JulianDate, Longitude)> =
            positions.iter().map(|p| (p.at, p.longitude)).collect();
        let samples = self.classify(&pairs)?.collect();
        Ok(MotionSeries { body, samples })
    }
}

fn check_chronological<I>(instants: I) -> Result<()>
where
    I: IntoIterator<Item = JulianDate>,
{
    let mut previous: Option<JulianDate> = None;
    for (index, current) in instants.into_iter().enumerate() {
        if !current.jd().is_finite() {
            return Err(ZodiacalError::NonMonotonicInput {
                index,
                previous: previous.unwrap_or(current),
                current,
            });
        }
        if let Some(prev) = previous {
            if current.jd() <= prev.jd() {
                return Err(ZodiacalError::NonMonotonicInput {
                    index,
                    previous: prev,
                    current,
                });
            }
        }
        previous = Some(current);
    }
    Ok(())
}

/// Lazy, restartable classification of a sample slice
#[derive(Debug, Clone)]
pub struct MotionSamples<'a> {
    tracker: MotionTracker,
    samples: &'a [(JulianDate, Longitude)],
    index: usize,
}

impl<'a> MotionSamples<'a> {
    /// A fresh iterator over the same samples, starting from the first
    pub fn restart(&self) -> MotionSamples<'a> {
        MotionSamples {
            tracker: self.tracker,
            samples: self.samples,
            index: 0,
        }
    }
}

impl Iterator for MotionSamples<'_> {
    type Item = MotionSample;

    fn next(&mut self) -> Option<Self::Item> {
        let &(at, longitude) = self.samples.get(self.index)?;
        let sample = if self.index == 0 {
            MotionSample {
                at,
                longitude,
                direction: Direction::Unknown,
                delta_deg: None,
            }
        } else {
            let (_, previous) = self.samples[self.index - 1];
            let delta = signed_delta(previous, longitude);
            let direction = self.tracker.direction_of(delta);
            trace!("{} at {}: {:+.4}° {:?}", longitude, at, delta, direction);
            MotionSample {
                at,
                longitude,
                direction,
                delta_deg: Some(delta),
            }
        };
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MotionSamples<'_> {}

/// Kind of reversal in apparent motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StationType {
    /// Motion turns from direct to retrograde
    StationRetrograde,
    /// Motion turns from retrograde to direct
    StationDirect,
}

/// A reversal of motion located between two samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Station {
    pub station_type: StationType,
    /// Last sample instant certainly before the reversal
    pub from: JulianDate,
    /// First sample instant certainly after the reversal
    pub until: JulianDate,
    /// Sampled longitude at the turning point
    pub longitude: Longitude,
}

/// A maximal run of consecutive retrograde steps
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RetrogradeSpan {
    /// Sample at which the first retrograde step begins
    pub from: JulianDate,
    /// Sample at which the last retrograde step ends
    pub until: JulianDate,
    /// Total signed travel across the span (negative)
    pub travel_deg: f64,
    /// Number of retrograde steps
    pub steps: usize,
}

/// Classified motion samples collected for further analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotionSeries {
    /// The body, when the series was built from positions
    pub body: Option<Body>,
    pub samples: Vec<MotionSample>,
}

impl FromIterator<MotionSample> for MotionSeries {
    fn from_iter<I: IntoIterator<Item = MotionSample>>(iter: I) -> Self {
        MotionSeries {
            body: None,
            samples: iter.into_iter().collect(),
        }
    }
}

impl MotionSeries {
    /// Directions in sample order
    pub fn directions(&self) -> Vec<Direction> {
        self.samples.iter().map(|s| s.direction).collect()
    }

    /// Whether any step moved backwards
    pub fn has_retrograde(&self) -> bool {
        self.samples.iter().any(|s| s.direction == Direction::Retrograde)
    }

    fn require_steps(&self) -> Result<()> {
        if self.samples.len() < 2 {
            return Err(ZodiacalError::InsufficientData(format!(
                "direction needs at least 2 samples, got {}",
                self.samples.len()
            )));
        }
        Ok(())
    }

    /// Maximal runs of retrograde steps
    ///
    /// A stationary or direct step ends a run.
    pub fn retrograde_spans(&self) -> Result<Vec<RetrogradeSpan>> {
        self.require_steps()?;

        let mut spans = Vec::new();
        let mut open: Option<RetrogradeSpan> = None;
        for (i, sample) in self.samples.iter().enumerate().skip(1) {
            if sample.direction == Direction::Retrograde {
                let delta = sample.delta_deg.unwrap_or(0.0);
                let span = open.get_or_insert(RetrogradeSpan {
                    from: self.samples[i - 1].at,
                    until: sample.at,
                    travel_deg: 0.0,
                    steps: 0,
                });
                span.until = sample.at;
                span.travel_deg += delta;
                span.steps += 1;
            } else if let Some(span) = open.take() {
                spans.push(span);
            }
        }
        spans.extend(open);
        Ok(spans)
    }

    /// Reversals between direct and retrograde motion
    ///
    /// Stationary steps between the two are skipped over, so the reported
    /// bracket covers them.
    pub fn stations(&self) -> Result<Vec<Station>> {
        self.require_steps()?;

        let mut stations = Vec::new();
        // index of the last step that moved, and its direction
        let mut last_moving: Option<(usize, Direction)> = None;
        for (i, sample) in self.samples.iter().enumerate().skip(1) {
            let direction = sample.direction;
            if direction != Direction::Direct && direction != Direction::Retrograde {
                continue;
            }
            if let Some((j, previous)) = last_moving {
                if previous != direction {
                    let station_type = if direction == Direction::Retrograde {
                        StationType::StationRetrograde
                    } else {
                        StationType::StationDirect
                    };
                    stations.push(Station {
                        station_type,
                        from: self.samples[j - 1].at,
                        until: sample.at,
                        longitude: self.samples[j].longitude,
                    });
                }
            }
            last_moving = Some((i, direction));
        }
        Ok(stations)
    }
}
