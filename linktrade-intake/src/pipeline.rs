use crate::config::LegalitySettings;
use crate::decoder::{AttachmentDecoder, DecodeRejection, DecodedAttachment};
use crate::error::Rejection;
use crate::fence::strip_code_block;
use crate::gate::ValidationGate;
use crate::materializer::materialize;
use crate::queue::{Admission, TradeQueue};
use crate::rules::{MaterializeStatus, RulesEngine};
use crate::splitter::split_spec;
use crate::template::build_template;
use crate::SUPPORTED_GENERATION;
use linktrade_types::{
    CandidateEntity, LinkCode, Requester, RoutineType, TradeKind, TradeRequest,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A best-effort creature shown back to the requester. It was not queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Species name from the requester's set.
    pub species_name: String,
    pub entity: CandidateEntity,
    pub status: MaterializeStatus,
    pub reasons: Vec<Rejection>,
}

impl Advisory {
    /// Message to accompany the best-attempt file.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Oops! I wasn't able to create something from that. \
             Here's my best attempt for that {}!",
            self.species_name
        )
    }
}

/// How a single submission ended.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// The request is in the shared queue.
    Admitted(Admission),
    /// Not queued; a best-effort creature is offered for inspection.
    Advisory(Advisory),
    /// Not queued.
    Rejected(Rejection),
}

impl IntakeOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted(_))
    }

    /// The admission receipt, if the request was queued.
    pub fn admission(&self) -> Option<&Admission> {
        match self {
            Self::Admitted(admission) => Some(admission),
            _ => None,
        }
    }

    /// The rejection, if the request was refused without an advisory.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

/// Turns trade submissions into queue admissions.
///
/// Holds no per-request state; one instance can serve any number of
/// concurrent submissions.
pub struct TradeIntake {
    rules: Arc<dyn RulesEngine>,
    decoder: Arc<dyn AttachmentDecoder>,
    queue: Arc<dyn TradeQueue>,
    gate: ValidationGate,
}

impl TradeIntake {
    pub fn new(
        rules: Arc<dyn RulesEngine>,
        decoder: Arc<dyn AttachmentDecoder>,
        queue: Arc<dyn TradeQueue>,
        legality: &LegalitySettings,
    ) -> Self {
        Self::with_gate(rules, decoder, queue, ValidationGate::new(legality.verify_legality))
    }

    pub fn with_gate(
        rules: Arc<dyn RulesEngine>,
        decoder: Arc<dyn AttachmentDecoder>,
        queue: Arc<dyn TradeQueue>,
        gate: ValidationGate,
    ) -> Self {
        Self {
            rules,
            decoder,
            queue,
            gate,
        }
    }

    pub fn gate(&self) -> &ValidationGate {
        &self.gate
    }

    /// Handles a text-set submission.
    ///
    /// Format or legality failures come back as an [`IntakeOutcome::Advisory`]
    /// carrying the generator's best attempt; parse problems and
    /// tradability blocks are plain rejections.
    pub fn submit_set(
        &self,
        code: Option<LinkCode>,
        requester: Requester,
        privileged: bool,
        content: &str,
    ) -> IntakeOutcome {
        let content = strip_code_block(content);
        let split = split_spec(&content);
        debug!(
            requester = %requester.name,
            description = split.description.len(),
            overrides = split.override_lines.len(),
            invalid = split.invalid.len(),
            "split trade set"
        );

        let template = match build_template(self.rules.as_ref(), &split) {
            Ok(template) => template,
            Err(rejection) => return self.reject(&requester, rejection),
        };

        let materialized = materialize(
            self.rules.as_ref(),
            &template,
            &split.overrides,
            SUPPORTED_GENERATION,
        );
        let mut entity = materialized.entity;

        if let Err(reason) = self.gate.check_format(&entity) {
            return self.advise(
                &requester,
                template.species_name,
                entity,
                materialized.status,
                reason,
            );
        }
        if let Err(rejection) = self.gate.check_tradable(self.rules.as_ref(), &entity) {
            return self.reject(&requester, rejection);
        }
        if let Err(reason) = self.gate.check_legality(self.rules.as_ref(), &entity) {
            return self.advise(
                &requester,
                template.species_name,
                entity,
                materialized.status,
                reason,
            );
        }

        entity.reset_party_stats();
        self.admit(code, requester, privileged, entity)
    }

    /// Handles a file submission. Every failure is a plain rejection.
    pub fn submit_attachment(
        &self,
        code: Option<LinkCode>,
        requester: Requester,
        privileged: bool,
        attachment: Option<&[u8]>,
    ) -> IntakeOutcome {
        let Some(bytes) = attachment else {
            return self.reject(&requester, Rejection::MissingAttachment);
        };

        let entity = match self.decoder.decode(bytes) {
            DecodedAttachment::Decoded(entity) => entity,
            DecodedAttachment::Rejected(DecodeRejection::UnsupportedFormat(found)) => {
                let rejection = Rejection::FormatMismatch {
                    expected: self.gate.supported_format(),
                    found,
                };
                return self.reject(&requester, rejection);
            }
            DecodedAttachment::Rejected(DecodeRejection::Unreadable(reason)) => {
                return self.reject(&requester, Rejection::Undecodable(reason));
            }
        };

        if let Err(rejection) = self.gate.check(self.rules.as_ref(), &entity) {
            return self.reject(&requester, rejection);
        }

        self.admit(code, requester, privileged, entity)
    }

    /// Pending link-trade requests, as rendered by the queue.
    pub fn pending_trades(&self) -> String {
        self.queue.describe_pending(RoutineType::LinkTrade)
    }

    fn admit(
        &self,
        code: Option<LinkCode>,
        requester: Requester,
        privileged: bool,
        entity: CandidateEntity,
    ) -> IntakeOutcome {
        let code = code.unwrap_or_else(|| self.queue.next_random_code());
        let species = entity.species;
        let request = TradeRequest {
            code,
            requester: requester.clone(),
            entity,
            privileged,
            routine: RoutineType::LinkTrade,
            kind: TradeKind::Specific,
        };

        match self.queue.admit(request) {
            Ok(admission) => {
                info!(
                    requester = %requester.name,
                    %species,
                    position = admission.position,
                    privileged,
                    "trade request admitted"
                );
                IntakeOutcome::Admitted(admission)
            }
            Err(err) => self.reject(&requester, Rejection::Admission(err)),
        }
    }

    fn advise(
        &self,
        requester: &Requester,
        species_name: String,
        entity: CandidateEntity,
        status: MaterializeStatus,
        reason: Rejection,
    ) -> IntakeOutcome {
        warn!(
            requester = %requester.name,
            species = %entity.species,
            reason = reason.kind(),
            "returning best attempt instead of queueing"
        );
        IntakeOutcome::Advisory(Advisory {
            species_name,
            entity,
            status,
            reasons: vec![reason],
        })
    }

    fn reject(&self, requester: &Requester, rejection: Rejection) -> IntakeOutcome {
        info!(requester = %requester.name, reason = rejection.kind(), "trade request rejected");
        IntakeOutcome::Rejected(rejection)
    }
}
