use crate::entity::CandidateEntity;
use crate::ids::{LinkCode, RequesterId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which bot routine a queued request is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutineType {
    /// Trade a specific creature over a link code.
    LinkTrade,
    /// Trade back a clone of whatever the partner offers.
    Clone,
    /// Report the partner's seed.
    SeedCheck,
}

/// What the requester expects to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TradeKind {
    /// A specific, pre-built creature.
    Specific,
    /// A copy of the partner's offer.
    Clone,
    /// No creature; the trade is used only to inspect the partner.
    Seed,
}

/// The chat user behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    pub id: RequesterId,
    pub name: String,
}

impl Requester {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: RequesterId(id),
            name: name.into(),
        }
    }
}

impl fmt::Display for Requester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A validated request, ready to be handed to the shared trade queue.
///
/// Only built after the validation gate passes. The queue takes ownership
/// on admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub code: LinkCode,
    pub requester: Requester,
    pub entity: CandidateEntity,
    pub privileged: bool,
    pub routine: RoutineType,
    pub kind: TradeKind,
}
