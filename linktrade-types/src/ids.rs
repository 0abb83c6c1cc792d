//! Identifier types used throughout the intake pipeline.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric token both trading parties enter to find each other.
///
/// Codes are eight decimal digits (`0..=99_999_999`) and are shown to
/// users as two zero-padded groups of four, e.g. `0123 4567`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LinkCode(u32);

impl LinkCode {
    /// Largest code the game's link-trade screen accepts.
    pub const MAX: u32 = 99_999_999;

    /// Creates a link code, rejecting values with more than eight digits.
    pub fn new(value: u32) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::LinkCodeOutOfRange(u64::from(value)));
        }
        Ok(Self(value))
    }

    /// Creates a link code, clamping values above [`LinkCode::MAX`].
    #[must_use]
    pub fn saturating(value: u32) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Parses a code typed by a user. Spaces and dashes between digit
    /// groups are ignored, so `"1234 5678"` and `"1234-5678"` both work.
    pub fn parse(s: &str) -> Result<Self> {
        let digits: String = s
            .trim()
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidLinkCode(s.to_string()));
        }
        let value: u64 = digits
            .parse()
            .map_err(|_| Error::InvalidLinkCode(s.to_string()))?;
        if value > u64::from(Self::MAX) {
            return Err(Error::LinkCodeOutOfRange(value));
        }
        // value <= MAX fits in u32
        Ok(Self(value as u32))
    }
}

impl TryFrom<u32> for LinkCode {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LinkCode> for u32 {
    fn from(code: LinkCode) -> Self {
        code.0
    }
}

impl fmt::Display for LinkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04} {:04}", self.0 / 10_000, self.0 % 10_000)
    }
}

impl FromStr for LinkCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// National dex number of a species.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(pub u16);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

/// Stable identifier of the chat user who submitted a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequesterId(pub u64);

impl fmt::Display for RequesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
