//! Note store contract.
//!
//! The host application owns persistence, decks, and card templates; the
//! cloze core only reaches it through [`NoteStore`]. A store hands out a
//! blank [`Note`] shaped by its configured default note type and accepts the
//! filled note back for the final add.

use crate::error::{ReadingError, StoreError};
use serde::{Deserialize, Serialize};

/// Deck that notes land in when no deck name is given.
pub const DEFAULT_DECK_ID: i64 = 1;

/// Field carrying the original source reference, when the note type has one.
pub const SOURCE_FIELD: &str = "Source";
/// Field carrying a generated reading, when the note type has one.
pub const READING_FIELD: &str = "Reading";

/// Note type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Standard,
    Cloze,
}

/// The shape of a note type: name, kind, and ordered field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteModel {
    pub name: String,
    pub kind: ModelKind,
    pub field_names: Vec<String>,
}

impl NoteModel {
    /// Index of a named field, if the note type has it.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|f| f == name)
    }
}

/// A note under construction, handed out by [`NoteStore::new_note`].
///
/// `fields` is sized to the model's field list; index 0 is the primary text
/// field and index 1 the secondary notes field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub model: NoteModel,
    pub deck_id: i64,
    pub fields: Vec<String>,
    pub tags: Vec<String>,
}

impl Note {
    pub fn set_field(&mut self, index: usize, text: impl Into<String>) {
        self.fields[index] = text.into();
    }

    pub fn field(&self, index: usize) -> &str {
        &self.fields[index]
    }
}

/// Host-side note storage.
pub trait NoteStore {
    /// Create a blank note from the configured default note type.
    fn new_note(&self) -> Result<Note, StoreError>;

    /// Resolve a deck name to its id, creating the deck if needed.
    fn deck_id_or_create(&mut self, name: &str) -> Result<i64, StoreError>;

    /// True when the note's first field is empty or an existing note already
    /// carries the same first field.
    fn is_duplicate_or_empty(&self, note: &Note) -> bool;

    /// Commit the note. Returns the ids of the cards it generated; an empty
    /// list means no card template matched the note.
    fn add_note(&mut self, note: Note) -> Result<Vec<i64>, StoreError>;
}

/// Optional reading enrichment, e.g. furigana generation for Japanese text.
pub trait ReadingGenerator {
    fn reading(&self, text: &str) -> Result<String, ReadingError>;
}
