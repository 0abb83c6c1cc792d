//! Attachment-decoding seam for file submissions.

use linktrade_types::{CandidateEntity, StorageFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a decoder refused an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeRejection {
    /// The bytes are not a creature file of any known format.
    #[error("unreadable attachment: {0}")]
    Unreadable(String),
    /// A valid creature file, but not in the supported format.
    #[error("unsupported format {0}")]
    UnsupportedFormat(StorageFormat),
}

/// Tagged decoder result; callers never downcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedAttachment {
    Decoded(CandidateEntity),
    Rejected(DecodeRejection),
}

/// Turns an uploaded file into a creature record.
pub trait AttachmentDecoder: Send + Sync {
    /// Decodes `bytes`. Anything not in the supported storage format must be
    /// returned as [`DecodedAttachment::Rejected`].
    fn decode(&self, bytes: &[u8]) -> DecodedAttachment;
}
