use crate::ids::SpeciesId;
use crate::overrides::IdentityOverrides;
use serde::{Deserialize, Serialize};
use std::fmt;

/// On-disk storage layout of a creature record.
///
/// Each game generation stores creatures in its own binary layout; the bot
/// only trades in one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// Generation 7 (Sun/Moon, Ultra Sun/Ultra Moon).
    Pk7,
    /// Let's Go Pikachu/Eevee.
    Pb7,
    /// Generation 8 (Sword/Shield).
    Pk8,
    /// Brilliant Diamond/Shining Pearl.
    Pb8,
    /// Legends: Arceus.
    Pa8,
    /// Generation 9 (Scarlet/Violet).
    Pk9,
}

impl StorageFormat {
    /// Returns the game generation this format belongs to.
    #[must_use]
    pub fn generation(&self) -> u8 {
        match self {
            Self::Pk7 | Self::Pb7 => 7,
            Self::Pk8 | Self::Pb8 | Self::Pa8 => 8,
            Self::Pk9 => 9,
        }
    }

    /// Returns the conventional file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pk7 => "pk7",
            Self::Pb7 => "pb7",
            Self::Pk8 => "pk8",
            Self::Pb8 => "pb8",
            Self::Pa8 => "pa8",
            Self::Pk9 => "pk9",
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

/// Original-trainer identity stamped on a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerIdentity {
    pub secret_id: u16,
    pub trainer_id: u32,
    pub name: String,
}

/// The six battle stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

/// Volatile state a creature carries while in a party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyState {
    pub current_hp: u16,
    /// Status-condition bitfield (sleep counter, poison, burn, ...). Zero is healthy.
    pub status_condition: u32,
    pub stat_level: u8,
}

/// Where and how a creature was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginInfo {
    /// Game version the creature was obtained in.
    pub version: u8,
    pub met_location: u16,
    pub met_level: u8,
    pub language: u8,
}

/// A fully-specified creature record.
///
/// Produced either by materializing a [`crate::Template`] or by decoding an
/// uploaded attachment. This is the unit that crosses the validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEntity {
    pub format: StorageFormat,
    pub species: SpeciesId,
    pub form: u8,
    pub nickname: String,
    pub level: u8,
    pub nature: String,
    pub ability: String,
    pub held_item: Option<String>,
    pub shiny: bool,
    pub moves: Vec<String>,
    pub stats: StatBlock,
    pub party: PartyState,
    pub trainer: TrainerIdentity,
    pub origin: OriginInfo,
}

impl CandidateEntity {
    /// Applies trainer-identity overrides in a fixed order: secret id, trainer
    /// id, then trainer name. Absent overrides leave the current values alone.
    pub fn apply_overrides(&mut self, overrides: &IdentityOverrides) {
        if let Some(secret_id) = overrides.secret_id {
            self.trainer.secret_id = secret_id;
        }
        if let Some(trainer_id) = overrides.trainer_id {
            self.trainer.trainer_id = trainer_id;
        }
        if let Some(name) = &overrides.trainer_name {
            self.trainer.name.clone_from(name);
        }
    }

    /// Resets the party-only fields so the record matches a freshly boxed
    /// creature: full HP, no status condition, party level equal to level.
    pub fn reset_party_stats(&mut self) {
        self.party = PartyState {
            current_hp: self.stats.hp,
            status_condition: 0,
            stat_level: self.level,
        };
    }

    /// Returns true if the record is stored in `format`.
    #[must_use]
    pub fn is_format(&self, format: StorageFormat) -> bool {
        self.format == format
    }

    /// Serializes the record to JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a record from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
