//! Intake pipeline for link-trade requests.
//!
//! A request arrives either as a text set (creature description plus
//! optional trainer-identity lines) or as an uploaded creature file. This
//! crate turns it into a [`CandidateEntity`](linktrade_types::CandidateEntity),
//! checks it, and hands it to the shared trade queue:
//!
//! ```text
//! text ─► strip fences ─► split ─► template ─► materialize ─┐
//!                                                            ├─► gate ─► admit
//! file ─────────────────────────────► decode ───────────────┘
//! ```
//!
//! - [`split_spec`] separates description lines from identity overrides and
//!   collects lines it cannot use instead of failing.
//! - [`build_template`] runs the set parser and refuses any template with
//!   diagnostics.
//! - [`materialize`] expands a template into an entity and applies overrides.
//! - [`ValidationGate`] enforces format, tradability and (optionally) legality.
//! - [`TradeIntake`] wires it together over injected collaborators:
//!   [`RulesEngine`], [`AttachmentDecoder`] and [`TradeQueue`].
//!
//! Every submission ends in exactly one [`IntakeOutcome`]; a request is
//! offered to the queue at most once, and only after every check passed.

mod config;
mod decoder;
mod error;
mod fence;
mod gate;
mod materializer;
mod pipeline;
mod queue;
mod rules;
mod splitter;
mod template;

pub use config::{IntakeConfig, LegalitySettings, QueueSettings};
pub use decoder::{AttachmentDecoder, DecodeRejection, DecodedAttachment};
pub use error::{ConfigError, ConfigResult, Rejection};
pub use fence::{strip_code_block, LANGUAGE_TAGS};
pub use gate::ValidationGate;
pub use materializer::materialize;
pub use pipeline::{Advisory, IntakeOutcome, TradeIntake};
pub use queue::{Admission, AdmissionError, TradeQueue};
pub use rules::{MaterializeStatus, Materialized, RulesEngine, TrainerContext};
pub use splitter::{split_spec, OverrideKey, SplitSpec};
pub use template::build_template;

use linktrade_types::StorageFormat;

/// Game generation the bot trades in.
pub const SUPPORTED_GENERATION: u8 = 8;

/// The only storage format admitted to the queue.
pub const SUPPORTED_FORMAT: StorageFormat = StorageFormat::Pk8;
