use serde::{Deserialize, Serialize};

/// Trainer-identity values a requester asked to stamp onto the creature.
///
/// Every field is optional and independent; `None` means "keep whatever the
/// generator produced".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_name: Option<String>,
}

impl IdentityOverrides {
    /// Returns true if no override is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secret_id.is_none() && self.trainer_id.is_none() && self.trainer_name.is_none()
    }
}
