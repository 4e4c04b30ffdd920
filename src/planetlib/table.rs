//! Tabulated positions captured from a precise ephemeris
//!
//! A [`PositionTable`] holds positions fetched ahead of time (for example from
//! JPL Horizons) and serves them back through [`PositionProvider`]. Lookups
//! match instants exactly; there is no interpolation.

use std::collections::BTreeMap;

use super::{Body, Position, PositionProvider, ProviderError, ProviderResult};
use crate::time::JulianDate;
use crate::{Result, ZodiacalError};

/// In-memory position store keyed by body and instant
#[derive(Debug, Clone, Default)]
pub struct PositionTable {
    /// Positions per body, sorted by instant
    entries: BTreeMap<Body, Vec<Position>>,
}

impl PositionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a set of positions
    pub fn from_positions<I>(positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut table = Self::new();
        for position in positions {
            table.insert(position)?;
        }
        Ok(table)
    }

    /// Store a position, replacing any earlier one for the same body and instant
    ///
    /// Non-finite coordinates are rejected rather than stored.
    pub fn insert(&mut self, position: Position) -> Result<()> {
        let finite_latitude = position.latitude.map_or(true, f64::is_finite);
        if !position.at.jd().is_finite() || !position.longitude.is_finite() || !finite_latitude {
            return Err(ZodiacalError::Config(format!(
                "refusing to tabulate non-finite position {:?}",
                position
            )));
        }

        let rows = self.entries.entry(position.body).or_default();
        match rows.binary_search_by(|row| row.at.jd().total_cmp(&position.at.jd())) {
            Ok(index) => rows[index] = position,
            Err(index) => rows.insert(index, position),
        }
        Ok(())
    }

    /// Number of stored positions across all bodies
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bodies with at least one stored position
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.entries.keys().copied()
    }
}

impl PositionProvider for PositionTable {
    fn position_of(&self, body: Body, at: JulianDate) -> ProviderResult {
        let rows = self
            .entries
            .get(&body)
            .ok_or(ProviderError::UnknownBody(body))?;
        rows.binary_search_by(|row| row.at.jd().total_cmp(&at.jd()))
            .map(|index| rows[index])
            .map_err(|_| ProviderError::Unavailable {
                body,
                at,
                reason: "no tabulated position at this instant".to_string(),
            })
    }
}
