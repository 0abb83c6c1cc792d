//! Splits a pasted set into creature-description lines and trainer-identity
//! overrides.
//!
//! Lines are handled one at a time and never abort the block: a line that
//! names an override but carries an unusable value is set aside as an
//! invalid extra, and everything else is kept verbatim for the set parser.

use linktrade_types::IdentityOverrides;
use serde::{Deserialize, Serialize};

/// A trainer-identity line a requester may add to a set.
///
/// Matching is case-sensitive and looks for `"<label>:"` anywhere in the
/// line. Keys are tried in declaration order, so a `Trainer Id:` line is
/// never mistaken for a `Trainer:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKey {
    SecretId,
    TrainerId,
    TrainerName,
}

impl OverrideKey {
    /// All keys, in matching order.
    pub const ALL: [OverrideKey; 3] = [Self::SecretId, Self::TrainerId, Self::TrainerName];

    /// The label as it appears in a set, without the colon.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SecretId => "Secret Id",
            Self::TrainerId => "Trainer Id",
            Self::TrainerName => "Trainer",
        }
    }

    /// Finds the override key a line refers to, if any.
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| {
            line.match_indices(key.label())
                .any(|(at, label)| line[at + label.len()..].starts_with(':'))
        })
    }

    /// Parses `value` into the typed field of `overrides`. Returns false,
    /// leaving `overrides` unchanged, when the value does not fit.
    fn assign(&self, value: &str, overrides: &mut IdentityOverrides) -> bool {
        match self {
            Self::SecretId => match value.parse::<u16>() {
                Ok(v) => overrides.secret_id = Some(v),
                Err(_) => return false,
            },
            Self::TrainerId => match value.parse::<u32>() {
                Ok(v) => overrides.trainer_id = Some(v),
                Err(_) => return false,
            },
            Self::TrainerName => overrides.trainer_name = Some(value.to_string()),
        }
        true
    }
}

/// Result of splitting a set.
///
/// Every input line ends up in exactly one of `description`,
/// `override_lines` or `invalid`, in input order within each list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSpec {
    /// Lines handed to the set parser, verbatim.
    pub description: Vec<String>,
    /// Effective overrides. A key given twice keeps its last valid value.
    pub overrides: IdentityOverrides,
    /// Lines that were consumed as overrides.
    pub override_lines: Vec<String>,
    /// Override lines whose value could not be used.
    pub invalid: Vec<String>,
}

impl SplitSpec {
    /// The description lines joined back into a block for the set parser.
    #[must_use]
    pub fn description_text(&self) -> String {
        self.description.join("\n")
    }

    /// Total number of input lines accounted for.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.description.len() + self.override_lines.len() + self.invalid.len()
    }

    fn push_line(mut self, line: &str) -> Self {
        let Some(key) = OverrideKey::detect(line) else {
            self.description.push(line.to_string());
            return self;
        };

        let value = line.split_once(':').map(|(_, v)| v.trim()).unwrap_or_default();
        if key.assign(value, &mut self.overrides) {
            self.override_lines.push(line.to_string());
        } else {
            self.invalid.push(line.to_string());
        }
        self
    }
}

/// Splits a set (already stripped of code fences) on `\n` and sorts each
/// line into description, override or invalid extra.
pub fn split_spec(text: &str) -> SplitSpec {
    text.split('\n').fold(SplitSpec::default(), SplitSpec::push_line)
}
