//! Error types for the intake pipeline.

use crate::queue::AdmissionError;
use linktrade_types::{SpeciesId, StorageFormat};
use thiserror::Error;

/// Why a single trade request was turned away.
///
/// Every variant is scoped to one request; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// One or more lines could not be interpreted. Holds every offending
    /// line verbatim, override lines first, then parser diagnostics.
    #[error("Unable to parse Showdown set:\n{}", lines.join("\n"))]
    ParseDiagnostic { lines: Vec<String> },

    /// A file submission arrived without a file.
    #[error("No attachment provided!")]
    MissingAttachment,

    /// The attachment could not be read as a creature file at all.
    #[error("Unable to read attachment: {0}")]
    Undecodable(String),

    /// The creature is stored in a format the bot does not trade.
    #[error("Expected a {expected} file, got {found}.")]
    FormatMismatch {
        expected: StorageFormat,
        found: StorageFormat,
    },

    /// The creature can never be traded, regardless of legality.
    #[error("Provided creature {species} is blocked from trading!")]
    TradabilityBlock { species: SpeciesId },

    /// The rules engine judged the creature illegal while enforcement is on.
    #[error("Provided creature {species} is not legal, and cannot be traded!")]
    LegalityFailure { species: SpeciesId },

    /// The shared queue declined the request.
    #[error(transparent)]
    Admission(#[from] AdmissionError),
}

impl Rejection {
    /// Short, stable name for logs and metrics labels.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ParseDiagnostic { .. } => "parse_diagnostic",
            Self::MissingAttachment => "missing_attachment",
            Self::Undecodable(_) => "undecodable",
            Self::FormatMismatch { .. } => "format_mismatch",
            Self::TradabilityBlock { .. } => "tradability_block",
            Self::LegalityFailure { .. } => "legality_failure",
            Self::Admission(_) => "admission_failure",
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid trade code range {min}..={max} (max allowed {limit})")]
    InvalidCodeRange { min: u32, max: u32, limit: u32 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
