//! In-memory shared trade queue.
//!
//! Implements [`TradeQueue`] for a single bot process:
//! - Random link codes drawn from the configured range
//! - One pending request per requester
//! - Privileged requesters jump ahead of everyone else and bypass the
//!   capacity limit and the closed-queue switch
//! - FIFO order within each tier
//!
//! Running the trades themselves is the bot routine's job; it takes work
//! out with [`LinkTradeQueue::dequeue`].

mod code;

pub use code::CodeGenerator;

use linktrade_intake::{Admission, AdmissionError, ConfigResult, QueueSettings, TradeQueue};
use linktrade_types::{LinkCode, RequesterId, RoutineType, TradeRequest};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Shared queue of admitted trade requests, across all routines.
pub struct LinkTradeQueue {
    settings: QueueSettings,
    codes: CodeGenerator,
    pending: Mutex<Vec<TradeRequest>>,
}

impl LinkTradeQueue {
    /// Creates an empty queue. Fails if the configured code range is invalid.
    pub fn new(settings: QueueSettings) -> ConfigResult<Self> {
        settings.validate()?;
        let codes = CodeGenerator::new(&settings);
        Ok(Self {
            settings,
            codes,
            pending: Mutex::new(Vec::new()),
        })
    }

    pub fn settings(&self) -> &QueueSettings {
        &self.settings
    }

    /// Number of pending requests across all routines.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// 1-based position of `requester` within its routine's queue.
    pub fn position_of(&self, requester: RequesterId) -> Option<usize> {
        let pending = self.lock();
        let request = pending.iter().find(|r| r.requester.id == requester)?;
        let routine = request.routine;
        pending
            .iter()
            .filter(|r| r.routine == routine)
            .position(|r| r.requester.id == requester)
            .map(|i| i + 1)
    }

    /// Removes a requester's pending request, returning it if there was one.
    pub fn remove(&self, requester: RequesterId) -> Option<TradeRequest> {
        let mut pending = self.lock();
        let index = pending.iter().position(|r| r.requester.id == requester)?;
        let request = pending.remove(index);
        info!(requester = %request.requester.name, "left the trade queue");
        Some(request)
    }

    /// Takes the next request for `routine` off the front of the queue.
    pub fn dequeue(&self, routine: RoutineType) -> Option<TradeRequest> {
        let mut pending = self.lock();
        let index = pending.iter().position(|r| r.routine == routine)?;
        Some(pending.remove(index))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<TradeRequest>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TradeQueue for LinkTradeQueue {
    fn next_random_code(&self) -> LinkCode {
        let code = self.codes.next();
        debug!("drew link code {}", code);
        code
    }

    fn admit(&self, request: TradeRequest) -> Result<Admission, AdmissionError> {
        let mut pending = self.lock();

        if !self.settings.can_queue && !request.privileged {
            return Err(AdmissionError::QueueClosed);
        }
        if pending.iter().any(|r| r.requester.id == request.requester.id) {
            return Err(AdmissionError::AlreadyQueued {
                requester: request.requester.name.clone(),
            });
        }
        let capacity = self.settings.max_queue_count;
        if capacity > 0 && !request.privileged {
            let regular = pending.iter().filter(|r| !r.privileged).count();
            if regular >= capacity {
                return Err(AdmissionError::QueueFull { capacity });
            }
        }

        // Privileged requests go after the last privileged one, ahead of
        // every regular request.
        let index = if request.privileged {
            pending.iter().take_while(|r| r.privileged).count()
        } else {
            pending.len()
        };
        let position = pending[..index]
            .iter()
            .filter(|r| r.routine == request.routine)
            .count()
            + 1;

        let admission = Admission {
            code: request.code,
            requester: request.requester.clone(),
            routine: request.routine,
            position,
        };
        info!(
            requester = %request.requester.name,
            routine = ?request.routine,
            position,
            privileged = request.privileged,
            "queued trade request"
        );
        pending.insert(index, request);
        Ok(admission)
    }

    fn describe_pending(&self, routine: RoutineType) -> String {
        let pending = self.lock();
        let lines: Vec<String> = pending
            .iter()
            .filter(|r| r.routine == routine)
            .enumerate()
            .map(|(i, r)| format!("{}: {}", i + 1, r.requester.name))
            .collect();

        if lines.is_empty() {
            "Nobody in queue.".to_string()
        } else {
            lines.join("\n")
        }
    }
}
