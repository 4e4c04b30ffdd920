//! Zodiac sign mapping
//!
//! The ecliptic is divided into twelve fixed 30° signs starting at 0° Aries.

use std::fmt;

use serde::Serialize;

use crate::constants::SIGN_WIDTH;
use crate::coordinates::Longitude;
use crate::{Result, ZodiacalError};

/// The twelve zodiac signs in order of increasing longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs, indexed by `floor(longitude / 30)`
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Get the sign's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Zero-based position of the sign, Aries = 0
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Longitude at which the sign begins
    pub fn start(&self) -> Longitude {
        Longitude::from_degrees(self.index() as f64 * SIGN_WIDTH)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude expressed as a sign and an offset into it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// Degrees past the start of the sign, in `[0, 30)`
    pub degree_in_sign: f64,
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.1}°", self.sign, self.degree_in_sign)
    }
}

/// Maps a longitude onto its zodiac sign
///
/// ```rust
/// use zodiacal::coordinates::Longitude;
/// use zodiacal::zodiac::{to_zodiac, ZodiacSign};
///
/// let pos = to_zodiac(Longitude::from_degrees(47.5)).unwrap();
/// assert_eq!(pos.sign, ZodiacSign::Taurus);
/// assert_eq!(pos.degree_in_sign, 17.5);
/// ```
///
/// A non-finite longitude has no sign and is an error.
pub fn to_zodiac(lon: Longitude) -> Result<ZodiacPosition> {
    let degrees = lon.degrees();
    if !degrees.is_finite() {
        return Err(ZodiacalError::NonFiniteLongitude(format!(
            "{} has no zodiac sign",
            degrees
        )));
    }
    let index = ((degrees / SIGN_WIDTH).floor() as usize).min(ZodiacSign::ALL.len() - 1);
    // the quotient can round up onto the next sign boundary
    let degree_in_sign = (degrees - index as f64 * SIGN_WIDTH).max(0.0);
    Ok(ZodiacPosition {
        sign: ZodiacSign::ALL[index],
        degree_in_sign,
    })
}
