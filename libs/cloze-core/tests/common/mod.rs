//! Shared fixtures for integration tests.

use cloze_core::error::{ReadingError, StoreError};
use cloze_core::store::{ModelKind, Note, NoteModel, NoteStore, ReadingGenerator, DEFAULT_DECK_ID};
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// In-memory note store with a single configurable note type.
pub struct MemoryStore {
    pub model: Option<NoteModel>,
    pub decks: HashMap<String, i64>,
    pub notes: Vec<Note>,
    next_deck_id: i64,
    next_card_id: i64,
}

impl MemoryStore {
    pub fn with_model(model: NoteModel) -> Self {
        Self {
            model: Some(model),
            decks: HashMap::new(),
            notes: Vec::new(),
            next_deck_id: DEFAULT_DECK_ID + 1,
            next_card_id: 1,
        }
    }

    pub fn without_model() -> Self {
        Self {
            model: None,
            decks: HashMap::new(),
            notes: Vec::new(),
            next_deck_id: DEFAULT_DECK_ID + 1,
            next_card_id: 1,
        }
    }
}

impl NoteStore for MemoryStore {
    fn new_note(&self) -> Result<Note, StoreError> {
        let model = self.model.clone().ok_or(StoreError::NoDefaultNoteType)?;
        let fields = vec![String::new(); model.field_names.len()];
        Ok(Note {
            model,
            deck_id: DEFAULT_DECK_ID,
            fields,
            tags: Vec::new(),
        })
    }

    fn deck_id_or_create(&mut self, name: &str) -> Result<i64, StoreError> {
        if let Some(&id) = self.decks.get(name) {
            return Ok(id);
        }
        let id = self.next_deck_id;
        self.next_deck_id += 1;
        self.decks.insert(name.to_string(), id);
        Ok(id)
    }

    fn is_duplicate_or_empty(&self, note: &Note) -> bool {
        let first = note.field(0);
        first.is_empty() || self.notes.iter().any(|n| n.field(0) == first)
    }

    fn add_note(&mut self, note: Note) -> Result<Vec<i64>, StoreError> {
        // One card per distinct cloze group index in the text field, the way
        // a cloze template expands.
        let groups = distinct_cloze_groups(note.field(0));
        let ids = (0..groups)
            .map(|_| {
                let id = self.next_card_id;
                self.next_card_id += 1;
                id
            })
            .collect();
        self.notes.push(note);
        Ok(ids)
    }
}

fn distinct_cloze_groups(text: &str) -> usize {
    let re = Regex::new(r"\{\{c(\d+)::").unwrap();
    re.captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect::<HashSet<_>>()
        .len()
}

/// Note type fixtures.
pub fn cloze_model() -> NoteModel {
    NoteModel {
        name: "Cloze".to_string(),
        kind: ModelKind::Cloze,
        field_names: vec!["Text".to_string(), "Extra".to_string()],
    }
}

pub fn cloze_model_with(extra_fields: &[&str]) -> NoteModel {
    let mut model = cloze_model();
    model
        .field_names
        .extend(extra_fields.iter().map(|f| f.to_string()));
    model
}

pub fn basic_model() -> NoteModel {
    NoteModel {
        name: "Basic".to_string(),
        kind: ModelKind::Standard,
        field_names: vec!["Front".to_string(), "Back".to_string()],
    }
}

/// Reading generator that always succeeds with a fixed transform.
pub struct EchoReading;

impl ReadingGenerator for EchoReading {
    fn reading(&self, text: &str) -> Result<String, ReadingError> {
        Ok(format!("reading[{text}]"))
    }
}

/// Reading generator that always fails.
pub struct BrokenReading;

impl ReadingGenerator for BrokenReading {
    fn reading(&self, _text: &str) -> Result<String, ReadingError> {
        Err(ReadingError("dictionary unavailable".to_string()))
    }
}
