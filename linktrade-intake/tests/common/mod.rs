//! Shared fakes for intake tests.

#![allow(dead_code)]

use linktrade_intake::{
    Admission, AdmissionError, AttachmentDecoder, DecodeRejection, DecodedAttachment,
    MaterializeStatus, Materialized, RulesEngine, TradeIntake, TradeQueue, TrainerContext,
    ValidationGate,
};
use linktrade_types::{
    CandidateEntity, LinkCode, OriginInfo, PartyState, Requester, RoutineType, SpeciesId,
    StatBlock, StorageFormat, Template, TradeRequest, TrainerIdentity,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ── Rules engine ─────────────────────────────────────────────────

/// Rules engine with switchable verdicts and call counters.
///
/// The set parser takes the species from the first line (before any `@`)
/// and reports every line starting with `Bogus` as invalid.
pub struct FakeRules {
    pub legal: bool,
    pub tradable: bool,
    pub format: StorageFormat,
    pub status: MaterializeStatus,
    pub parse_calls: AtomicUsize,
    pub materialize_calls: AtomicUsize,
    pub legality_calls: AtomicUsize,
    pub tradable_calls: AtomicUsize,
}

impl Default for FakeRules {
    fn default() -> Self {
        Self {
            legal: true,
            tradable: true,
            format: StorageFormat::Pk8,
            status: MaterializeStatus::Regenerated,
            parse_calls: AtomicUsize::new(0),
            materialize_calls: AtomicUsize::new(0),
            legality_calls: AtomicUsize::new(0),
            tradable_calls: AtomicUsize::new(0),
        }
    }
}

impl FakeRules {
    pub fn illegal() -> Self {
        Self {
            legal: false,
            status: MaterializeStatus::Failed,
            ..Self::default()
        }
    }

    pub fn untradable() -> Self {
        Self {
            tradable: false,
            ..Self::default()
        }
    }

    pub fn producing(format: StorageFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn legality_calls(&self) -> usize {
        self.legality_calls.load(Ordering::SeqCst)
    }

    pub fn materialize_calls(&self) -> usize {
        self.materialize_calls.load(Ordering::SeqCst)
    }
}

fn species_for(name: &str) -> SpeciesId {
    match name {
        "Pikachu" => SpeciesId(25),
        "Eevee" => SpeciesId(133),
        "Zacian" => SpeciesId(888),
        _ => SpeciesId(1),
    }
}

impl RulesEngine for FakeRules {
    fn parse_set(&self, text: &str) -> Template {
        self.parse_calls.fetch_add(1, Ordering::SeqCst);
        let mut lines = text.split('\n');
        let first = lines.next().unwrap_or_default();
        let name = first.split('@').next().unwrap_or_default().trim();

        let mut template = Template::new(species_for(name), name);
        if first.starts_with("Bogus") {
            template.invalid_lines.push(first.to_string());
        }
        for line in lines {
            if line.starts_with("Bogus") {
                template.invalid_lines.push(line.to_string());
            } else if let Some(ability) = line.strip_prefix("Ability: ") {
                template.ability = Some(ability.trim().to_string());
            } else if let Some(mv) = line.strip_prefix("- ") {
                template.moves.push(mv.trim().to_string());
            }
        }
        template
    }

    fn trainer_context(&self, generation: u8) -> TrainerContext {
        TrainerContext {
            generation,
            name: "LinkBot".to_string(),
            trainer_id: 111_111,
            secret_id: 2222,
            language: 2,
        }
    }

    fn materialize(&self, template: &Template, trainer: &TrainerContext) -> Materialized {
        self.materialize_calls.fetch_add(1, Ordering::SeqCst);
        Materialized {
            entity: make_entity_with(self.format, template, trainer),
            status: self.status,
        }
    }

    fn is_legal(&self, _entity: &CandidateEntity) -> bool {
        self.legality_calls.fetch_add(1, Ordering::SeqCst);
        self.legal
    }

    fn is_tradable(&self, _entity: &CandidateEntity) -> bool {
        self.tradable_calls.fetch_add(1, Ordering::SeqCst);
        self.tradable
    }
}

pub fn make_entity_with(
    format: StorageFormat,
    template: &Template,
    trainer: &TrainerContext,
) -> CandidateEntity {
    CandidateEntity {
        format,
        species: template.species,
        form: 0,
        nickname: template.species_name.clone(),
        level: template.level.unwrap_or(100),
        nature: template.nature.clone().unwrap_or_else(|| "Hardy".to_string()),
        ability: template.ability.clone().unwrap_or_else(|| "Static".to_string()),
        held_item: template.held_item.clone(),
        shiny: template.shiny,
        moves: template.moves.clone(),
        stats: StatBlock {
            hp: 211,
            attack: 146,
            defense: 116,
            sp_attack: 136,
            sp_defense: 136,
            speed: 216,
        },
        // Non-default so the party reset is observable.
        party: PartyState {
            current_hp: 1,
            status_condition: 0x40,
            stat_level: 0,
        },
        trainer: TrainerIdentity {
            secret_id: trainer.secret_id,
            trainer_id: trainer.trainer_id,
            name: trainer.name.clone(),
        },
        origin: OriginInfo {
            version: 44,
            met_location: 30001,
            met_level: 100,
            language: trainer.language,
        },
    }
}

/// A ready-made entity as a decoder would return it.
pub fn make_entity(format: StorageFormat) -> CandidateEntity {
    let template = Template::new(SpeciesId(25), "Pikachu");
    let trainer = FakeRules::default().trainer_context(8);
    make_entity_with(format, &template, &trainer)
}

// ── Decoder ──────────────────────────────────────────────────────

/// Decodes JSON-encoded entities. A strict decoder refuses formats other
/// than PK8 itself; a lax one passes them through.
pub struct JsonDecoder {
    pub strict: bool,
}

impl AttachmentDecoder for JsonDecoder {
    fn decode(&self, bytes: &[u8]) -> DecodedAttachment {
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                return DecodedAttachment::Rejected(DecodeRejection::Unreadable(e.to_string()));
            }
        };
        match CandidateEntity::from_json(text) {
            Ok(entity) if self.strict && entity.format != StorageFormat::Pk8 => {
                DecodedAttachment::Rejected(DecodeRejection::UnsupportedFormat(entity.format))
            }
            Ok(entity) => DecodedAttachment::Decoded(entity),
            Err(e) => DecodedAttachment::Rejected(DecodeRejection::Unreadable(e.to_string())),
        }
    }
}

pub fn encode(entity: &CandidateEntity) -> Vec<u8> {
    entity.to_json().unwrap().into_bytes()
}

// ── Queue ────────────────────────────────────────────────────────

/// Queue that records every admitted request.
pub struct RecordingQueue {
    pub random_code: LinkCode,
    pub decline: Option<AdmissionError>,
    pub admitted: Mutex<Vec<TradeRequest>>,
    pub admit_calls: AtomicUsize,
    pub code_draws: AtomicUsize,
}

impl RecordingQueue {
    pub fn new() -> Self {
        Self {
            random_code: LinkCode::new(4242_4242).unwrap(),
            decline: None,
            admitted: Mutex::new(Vec::new()),
            admit_calls: AtomicUsize::new(0),
            code_draws: AtomicUsize::new(0),
        }
    }

    pub fn declining(err: AdmissionError) -> Self {
        Self {
            decline: Some(err),
            ..Self::new()
        }
    }

    pub fn admit_calls(&self) -> usize {
        self.admit_calls.load(Ordering::SeqCst)
    }

    pub fn admitted(&self) -> Vec<TradeRequest> {
        self.admitted.lock().unwrap().clone()
    }
}

impl TradeQueue for RecordingQueue {
    fn next_random_code(&self) -> LinkCode {
        self.code_draws.fetch_add(1, Ordering::SeqCst);
        self.random_code
    }

    fn admit(&self, request: TradeRequest) -> Result<Admission, AdmissionError> {
        self.admit_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.decline {
            return Err(err.clone());
        }
        let mut admitted = self.admitted.lock().unwrap();
        let admission = Admission {
            code: request.code,
            requester: request.requester.clone(),
            routine: request.routine,
            position: admitted.len() + 1,
        };
        admitted.push(request);
        Ok(admission)
    }

    fn describe_pending(&self, routine: RoutineType) -> String {
        format!("{routine:?}: {}", self.admitted.lock().unwrap().len())
    }
}

// ── Wiring ───────────────────────────────────────────────────────

pub struct Harness {
    pub rules: Arc<FakeRules>,
    pub queue: Arc<RecordingQueue>,
    pub intake: TradeIntake,
}

pub fn harness(rules: FakeRules, queue: RecordingQueue, verify_legality: bool) -> Harness {
    harness_with_decoder(rules, queue, verify_legality, JsonDecoder { strict: true })
}

pub fn harness_with_decoder(
    rules: FakeRules,
    queue: RecordingQueue,
    verify_legality: bool,
    decoder: JsonDecoder,
) -> Harness {
    let rules = Arc::new(rules);
    let queue = Arc::new(queue);
    let intake = TradeIntake::with_gate(
        rules.clone(),
        Arc::new(decoder),
        queue.clone(),
        ValidationGate::new(verify_legality),
    );
    Harness {
        rules,
        queue,
        intake,
    }
}

pub fn ash() -> Requester {
    Requester::new(1001, "Ash")
}

pub fn code(value: u32) -> LinkCode {
    LinkCode::new(value).unwrap()
}
