//! Core type definitions for the link-trade intake pipeline.
//!
//! This crate defines the plain data types shared by the intake pipeline,
//! the shared trade queue and the operator tooling:
//! - Identifiers (`LinkCode`, `SpeciesId`, `RequesterId`)
//! - The canonical creature record ([`CandidateEntity`]) and its storage format
//! - Parsed-but-not-materialized [`Template`]s
//! - Trainer identity overrides captured from a text request
//! - Admitted [`TradeRequest`]s and their routine/kind tags
//!
//! Nothing here talks to a rules engine or a queue; those are collaborator
//! traits owned by `linktrade-intake`.

mod entity;
mod ids;
mod overrides;
mod request;
mod template;

pub use entity::{
    CandidateEntity, OriginInfo, PartyState, StatBlock, StorageFormat, TrainerIdentity,
};
pub use ids::{LinkCode, RequesterId, SpeciesId};
pub use overrides::IdentityOverrides;
pub use request::{Requester, RoutineType, TradeKind, TradeRequest};
pub use template::Template;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("link code {0} is out of range (0..={max})", max = LinkCode::MAX)]
    LinkCodeOutOfRange(u64),

    #[error("invalid link code: {0}")]
    InvalidLinkCode(String),
}
