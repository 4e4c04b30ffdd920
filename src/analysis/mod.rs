//! Analytics over positions already fetched from a provider
//!
//! Nothing here performs I/O or calls a provider; every function works only
//! on the values it is given and may run concurrently with any other.

pub mod cluster;
pub mod conjunction;
pub mod motion;

pub use cluster::Cluster;
pub use conjunction::{ConjunctionEvaluator, ConjunctionReport, ConjunctionThresholds};
pub use motion::{
    Direction, MotionSample, MotionSamples, MotionSeries, MotionTracker, RetrogradeSpan, Station,
    StationType,
};
