//! Constants module for ecliptic longitude analytics

// Angles
/// Degrees in a complete circle
pub const FULL_CIRCLE: f64 = 360.0;
/// Degrees in half a circle; the largest shortest-path rotation
pub const HALF_CIRCLE: f64 = 180.0;
/// Width of one zodiac sign in degrees
pub const SIGN_WIDTH: f64 = 30.0;

// Time constants
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Julian date of the Unix epoch (1970-01-01T00:00:00 UTC)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

// Default analysis thresholds
/// Maximum Sun-Moon longitude separation for a conjunction, in degrees
pub const DEFAULT_CONJUNCTION_DEG: f64 = 15.0;
/// Maximum absolute ecliptic latitude for a body to count as near the ecliptic
pub const DEFAULT_LATITUDE_DEG: f64 = 1.5;
/// Largest covering arc for a set of bodies to count as clustered (six signs)
pub const DEFAULT_CLUSTER_SPAN_DEG: f64 = 180.0;
