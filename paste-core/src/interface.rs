//! Paste FFI Interface Definition
//!
//! This file defines the public types exposed to Swift via UniFFI.
//! It acts as the source of truth for shared types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// A single emoji: the glyph and its display name.
///
/// Two values are equal iff both the glyph and the name are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Record)]
pub struct Emoji {
    pub character: String,
    pub name: String,
}

impl Emoji {
    pub fn new(character: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            name: name.into(),
        }
    }
}

/// Outcome of tapping a search result row
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct Selection {
    pub emoji: Emoji,
    /// HUD text shown after the copy, e.g. "Copied 😀"
    pub confirmation: String,
}

/// What the device can present, queried by Swift from MessageUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, uniffi::Record)]
pub struct DeviceCapabilities {
    pub can_send_text: bool,
    pub can_send_mail: bool,
}

// ═══════════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Error type for Paste operations
#[derive(Debug, Error, uniffi::Error)]
pub enum PasteError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<crate::database::DatabaseError> for PasteError {
    fn from(e: crate::database::DatabaseError) -> Self {
        PasteError::Database(e.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// FOREIGN TRAITS (implemented in Swift)
// ═══════════════════════════════════════════════════════════════════════════════

/// System clipboard. Swift implements this over `UIPasteboard.general`.
#[uniffi::export(with_foreign)]
pub trait Pasteboard: Send + Sync {
    fn set_string(&self, value: String);
}
