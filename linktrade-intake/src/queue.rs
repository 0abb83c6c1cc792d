//! Shared-trade-queue seam.

use linktrade_types::{LinkCode, Requester, RoutineType, TradeRequest};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Receipt for a request the queue accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    pub code: LinkCode,
    pub requester: Requester,
    pub routine: RoutineType,
    /// 1-based position in the routine's queue at admission time.
    pub position: usize,
}

/// The queue's reasons for declining a request. Surfaced to the requester
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error("Sorry, {requester}, you are already in the queue.")]
    AlreadyQueued { requester: String },

    #[error("Sorry, the queue is full ({capacity} pending). Try again later.")]
    QueueFull { capacity: usize },

    #[error("Sorry, I am not currently accepting queue requests!")]
    QueueClosed,

    #[error("{0}")]
    Declined(String),
}

/// The single queue every admitted trade request goes into.
pub trait TradeQueue: Send + Sync {
    /// Draws a fresh link code for a requester who did not supply one.
    fn next_random_code(&self) -> LinkCode;

    /// Takes ownership of a validated request.
    fn admit(&self, request: TradeRequest) -> Result<Admission, AdmissionError>;

    /// Human-readable list of pending requests for `routine`.
    fn describe_pending(&self, routine: RoutineType) -> String;
}
