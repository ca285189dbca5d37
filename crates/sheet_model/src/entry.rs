//! Row entry types
//!
//! One value per logical input row, immutable once parsed.

use serde::{Deserialize, Serialize};

/// One character-mode row: a pinyin label and the glyph practiced across
/// the columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRow {
    pub pinyin: String,
    pub glyph: String,
}

/// One slot of a phrase payload. A blank slot renders as spacing only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhraseSlot {
    Glyph(String),
    Blank,
}

impl PhraseSlot {
    pub fn is_blank(&self) -> bool {
        matches!(self, PhraseSlot::Blank)
    }
}

/// One phrase-mode row: a pinyin label and a fixed number of slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRow {
    pub pinyin: String,
    pub slots: Vec<PhraseSlot>,
}
