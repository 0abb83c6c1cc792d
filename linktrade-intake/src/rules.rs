//! Rules-engine seam.
//!
//! Set parsing, entity generation and legality analysis belong to an
//! external rules engine. The pipeline only needs the four calls below.

use linktrade_types::{CandidateEntity, Template};
use serde::{Deserialize, Serialize};

/// Default trainer identity the generator stamps on new creatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerContext {
    pub generation: u8,
    pub name: String,
    pub trainer_id: u32,
    pub secret_id: u16,
    pub language: u8,
}

/// How the generator fared when expanding a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterializeStatus {
    /// Produced a creature matching the template.
    Regenerated,
    /// Could not satisfy the template; the entity is a best effort.
    Failed,
    /// Gave up before finishing; the entity is a best effort.
    Timeout,
}

/// A generator result. There is always an entity, even on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub entity: CandidateEntity,
    pub status: MaterializeStatus,
}

/// Parser, generator and legality checker for creature records.
///
/// Implementations must be safe to share across concurrently handled
/// requests; the pipeline never holds them behind a lock.
pub trait RulesEngine: Send + Sync {
    /// Parses a text set. Lines the parser could not interpret are reported
    /// in [`Template::invalid_lines`].
    fn parse_set(&self, text: &str) -> Template;

    /// Returns the default trainer the generator should use for `generation`.
    fn trainer_context(&self, generation: u8) -> TrainerContext;

    /// Expands a template into a concrete creature. Never fails outright.
    fn materialize(&self, template: &Template, trainer: &TrainerContext) -> Materialized;

    /// Returns true if the creature could legitimately exist in-game.
    fn is_legal(&self, entity: &CandidateEntity) -> bool;

    /// Returns false for creatures that may never be traded.
    fn is_tradable(&self, entity: &CandidateEntity) -> bool;
}
