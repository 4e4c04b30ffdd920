//! Clustering of simultaneous positions on the ecliptic
//!
//! A set of bodies is clustered within `t` degrees when the shortest arc
//! covering all of them is no longer than `t`. The arc is found with
//! [`minimal_covering_arc`], so a group straddling 0° is measured by its real
//! extent rather than by `max - min`.

use log::warn;
use serde::Serialize;

use crate::constants::DEFAULT_CLUSTER_SPAN_DEG;
use crate::coordinates::{minimal_covering_arc, Arc, Longitude};
use crate::planetlib::{Body, Position, ProviderResult};
use crate::{Result, ZodiacalError};

/// The tightest grouping of a set of bodies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    /// Shortest arc containing every member
    pub arc: Arc,
    /// Bodies included, in input order without repeats
    pub members: Vec<Body>,
    /// Bodies left out because no position was available
    pub missing: Vec<Body>,
}

impl Cluster {
    /// Whether all members fit within `max_deg` degrees
    pub fn within_deg(&self, max_deg: f64) -> bool {
        self.arc.within_deg(max_deg)
    }

    /// Whether all members fit within six signs
    pub fn within_six_signs(&self) -> bool {
        self.within_deg(DEFAULT_CLUSTER_SPAN_DEG)
    }

    /// Length of the covering arc in degrees
    pub fn span(&self) -> f64 {
        self.arc.length
    }

    /// Whether every requested body had a position
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Cluster bodies by their longitudes
///
/// Every longitude counts toward the arc. A body listed twice is reported
/// once in [`Cluster::members`].
pub fn analyze(positions: &[(Body, Longitude)]) -> Result<Cluster> {
    if positions.is_empty() {
        return Err(ZodiacalError::InsufficientData(
            "clustering needs at least one position".to_string(),
        ));
    }
    let arc = minimal_covering_arc(positions.iter().map(|(_, lon)| *lon))?;

    let mut members: Vec<Body> = Vec::with_capacity(positions.len());
    for (body, _) in positions {
        if !members.contains(body) {
            members.push(*body);
        }
    }

    Ok(Cluster {
        arc,
        members,
        missing: Vec::new(),
    })
}

/// Cluster a set of simultaneous positions
pub fn analyze_positions(positions: &[Position]) -> Result<Cluster> {
    let pairs: Vec<(Body, Longitude)> = positions.iter().map(|p| (p.body, p.longitude)).collect();
    analyze(&pairs)
}

/// Cluster the available entries of a provider batch
///
/// Failed lookups are skipped and listed in [`Cluster::missing`]. If nothing
/// is available the call fails rather than reporting an empty cluster.
pub fn analyze_results(results: &[(Body, ProviderResult)]) -> Result<Cluster> {
    let mut pairs = Vec::with_capacity(results.len());
    let mut missing = Vec::new();
    for (body, result) in results {
        match result {
            Ok(position) => pairs.push((*body, position.longitude)),
            Err(e) => {
                warn!("Leaving {} out of the cluster: {}", body, e);
                if !missing.contains(body) {
                    missing.push(*body);
                }
            }
        }
    }

    if pairs.is_empty() {
        return Err(ZodiacalError::InsufficientData(format!(
            "no positions available for clustering ({} requested)",
            results.len()
        )));
    }

    let mut cluster = analyze(&pairs)?;
    cluster.missing = missing;
    Ok(cluster)
}
