use crate::ids::SpeciesId;
use serde::{Deserialize, Serialize};

/// A parsed, not yet materialized description of the creature a requester
/// wants: species plus whichever attributes the text set spelled out.
///
/// Produced by the rules engine's set parser. `invalid_lines` holds every
/// line the parser could not interpret, verbatim and in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub species: SpeciesId,
    /// Display name of the species, used when reporting a best attempt.
    pub species_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub held_item: Option<String>,
    #[serde(default)]
    pub shiny: bool,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub invalid_lines: Vec<String>,
}

impl Template {
    /// Creates a template for `species` with no other attributes.
    #[must_use]
    pub fn new(species: SpeciesId, species_name: impl Into<String>) -> Self {
        Self {
            species,
            species_name: species_name.into(),
            ..Self::default()
        }
    }

    /// Returns true if the parser understood every line it was given.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.invalid_lines.is_empty()
    }
}
