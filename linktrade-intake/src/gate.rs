use crate::error::Rejection;
use crate::rules::RulesEngine;
use crate::SUPPORTED_FORMAT;
use linktrade_types::{CandidateEntity, StorageFormat};
use tracing::debug;

/// The checks every creature must pass before it may be queued.
///
/// Checks run cheapest first and stop at the first failure:
/// storage format, then tradability, then legality. Legality is skipped
/// entirely when enforcement is off; the other two always apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationGate {
    supported_format: StorageFormat,
    verify_legality: bool,
}

impl ValidationGate {
    /// Creates a gate for the bot's supported format.
    #[must_use]
    pub fn new(verify_legality: bool) -> Self {
        Self::with_format(SUPPORTED_FORMAT, verify_legality)
    }

    /// Creates a gate for an explicit format.
    #[must_use]
    pub fn with_format(supported_format: StorageFormat, verify_legality: bool) -> Self {
        Self {
            supported_format,
            verify_legality,
        }
    }

    #[must_use]
    pub fn supported_format(&self) -> StorageFormat {
        self.supported_format
    }

    #[must_use]
    pub fn verifies_legality(&self) -> bool {
        self.verify_legality
    }

    pub fn check_format(&self, entity: &CandidateEntity) -> Result<(), Rejection> {
        if entity.is_format(self.supported_format) {
            Ok(())
        } else {
            Err(Rejection::FormatMismatch {
                expected: self.supported_format,
                found: entity.format,
            })
        }
    }

    pub fn check_tradable(
        &self,
        rules: &dyn RulesEngine,
        entity: &CandidateEntity,
    ) -> Result<(), Rejection> {
        if rules.is_tradable(entity) {
            Ok(())
        } else {
            Err(Rejection::TradabilityBlock {
                species: entity.species,
            })
        }
    }

    /// Runs legality analysis unless enforcement is disabled.
    pub fn check_legality(
        &self,
        rules: &dyn RulesEngine,
        entity: &CandidateEntity,
    ) -> Result<(), Rejection> {
        if !self.verify_legality {
            debug!(species = %entity.species, "legality enforcement disabled, skipping analysis");
            return Ok(());
        }
        if rules.is_legal(entity) {
            Ok(())
        } else {
            Err(Rejection::LegalityFailure {
                species: entity.species,
            })
        }
    }

    /// Runs all three checks in order.
    pub fn check(
        &self,
        rules: &dyn RulesEngine,
        entity: &CandidateEntity,
    ) -> Result<(), Rejection> {
        self.check_format(entity)?;
        self.check_tradable(rules, entity)?;
        self.check_legality(rules, entity)
    }
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self::new(true)
    }
}
