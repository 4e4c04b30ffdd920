//! Wraparound-safe geometry on the ecliptic circle

pub mod angle;
pub mod arc;

pub use angle::{normalize, separation, signed_delta, signed_delta_degrees, Longitude};
pub use arc::{minimal_covering_arc, Arc};
