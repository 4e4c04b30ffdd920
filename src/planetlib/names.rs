//! Body names and Horizons target codes
//!
//! Lookups are case-insensitive and accept the common Latin aliases as well
//! as the numeric JPL Horizons codes.

use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use thiserror::Error;

use super::Body;

const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// Extra names accepted on input
const ALIASES: &[(&str, Body)] = &[("sol", Body::Sun), ("luna", Body::Moon)];

lazy_static! {
    /// Map from lowercase names to bodies
    static ref BODY_NAMES: HashMap<String, Body> = {
        let mut m = HashMap::new();
        for body in ALL_BODIES {
            m.insert(body.name().to_lowercase(), body);
        }
        for &(alias, body) in ALIASES {
            m.insert(alias.to_string(), body);
        }
        m
    };

    /// Map from Horizons target codes to bodies
    static ref BODY_IDS: HashMap<i32, Body> = {
        let mut m = HashMap::new();
        for body in ALL_BODIES {
            m.insert(body.horizons_id(), body);
        }
        m
    };
}

/// Error returned when a string names no known body
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unrecognized body name: {0}")]
pub struct ParseBodyError(pub String);

/// Get the body for a name or alias, ignoring case
pub fn body_by_name(name: &str) -> Option<Body> {
    BODY_NAMES.get(&name.trim().to_lowercase()).copied()
}

/// Get the body for a Horizons target code
pub fn body_by_horizons_id(id: i32) -> Option<Body> {
    BODY_IDS.get(&id).copied()
}

impl FromStr for Body {
    type Err = ParseBodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        body_by_name(trimmed)
            .or_else(|| trimmed.parse::<i32>().ok().and_then(body_by_horizons_id))
            .ok_or_else(|| ParseBodyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Mars", Body::Mars)]
    #[case("mars", Body::Mars)]
    #[case("  SATURN ", Body::Saturn)]
    #[case("luna", Body::Moon)]
    #[case("Sol", Body::Sun)]
    #[case("499", Body::Mars)]
    #[case("10", Body::Sun)]
    fn test_parse(#[case] input: &str, #[case] expected: Body) {
        assert_eq!(input.parse::<Body>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Vulcan".parse::<Body>(),
            Err(ParseBodyError("Vulcan".to_string()))
        );
        assert!("42".parse::<Body>().is_err());
    }

    #[test]
    fn test_id_round_trip() {
        for body in ALL_BODIES {
            assert_eq!(body_by_horizons_id(body.horizons_id()), Some(body));
        }
    }
}
