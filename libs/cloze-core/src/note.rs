//! Cloze note creation against an injected note store.
//!
//! Mirrors the add flow of the host application: resolve the deck, verify
//! the note type is cloze-capable, derive the target list, substitute the
//! markers into the text, fill the note fields, and commit through the
//! store. Optional reading enrichment never aborts the add; a failure is
//! reported as a warning on the summary.

use crate::error::{AddError, Result};
use crate::parser::{parse_annotations, split_targets};
use crate::store::{
    ModelKind, NoteStore, ReadingGenerator, DEFAULT_DECK_ID, READING_FIELD, SOURCE_FIELD,
};
use crate::substitute;
use crate::types::{ClozeItem, MatchMode, TargetSource};
use serde::{Deserialize, Serialize};

/// Everything needed to build one cloze note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClozeNoteRequest {
    /// Text the cloze markers are embedded into (field 0).
    pub text: String,
    /// Secondary notes block (field 1); also the annotation source in
    /// [`TargetSource::Annotations`] mode.
    pub notes: String,
    /// Where the text came from; goes to the `Source` field when the note
    /// type has one, otherwise it is appended to the notes.
    pub source: String,
    /// Deck name; blank means the default deck.
    pub deck: String,
    /// Whitespace-separated tags.
    pub tags: String,
    pub targets: TargetSource,
    pub match_mode: MatchMode,
}

/// Outcome of a successful add.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSummary {
    /// Human-readable status line for the host UI.
    pub status: String,
    pub cloze_count: usize,
    pub card_count: usize,
    /// Set when an optional enrichment step failed but the add went through.
    pub warning: Option<String>,
}

/// Build a cloze note from `request` and commit it to `store`.
///
/// The note is only mutated after the note type check passes; a duplicate or
/// empty note aborts before the commit. A committed note that generates no
/// cards is reported as [`AddError::NoCards`] and stays in the store.
pub fn add_cloze_note<S: NoteStore>(
    store: &mut S,
    reading_gen: Option<&dyn ReadingGenerator>,
    request: &ClozeNoteRequest,
) -> Result<AddSummary> {
    let mut note = store.new_note()?;

    note.deck_id = if request.deck.trim().is_empty() {
        DEFAULT_DECK_ID
    } else {
        store.deck_id_or_create(request.deck.trim())?
    };

    if note.model.kind != ModelKind::Cloze {
        return Err(AddError::NotClozeModel {
            name: note.model.name.clone(),
        });
    }

    // Targets come from the raw notes block, before the newline conversion
    // rewrites it.
    let items = cloze_list(request);
    tracing::debug!(clozes = items.len(), "derived cloze list");

    let text = nl_to_br(&request.text);
    let mut notes_field = nl_to_br(&request.notes);
    let source = nl_to_br(&request.source);

    // Readings are generated from the text before markers go in.
    let reading_source = text.clone();

    let text = substitute::apply(&text, &items, request.match_mode);

    note.tags = request
        .tags
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if !source.is_empty() {
        match note.model.field_index(SOURCE_FIELD) {
            Some(index) => note.set_field(index, source),
            None => notes_field = format!("{notes_field}<br><br>{source}"),
        }
    }

    let mut warning = None;
    if let Some(index) = note.model.field_index(READING_FIELD) {
        match reading_gen {
            Some(generator) => match generator.reading(&reading_source) {
                Ok(reading) => note.set_field(index, reading),
                Err(err) => {
                    tracing::warn!(%err, "reading generation failed, leaving the field empty");
                    warning = Some(format!("Unable to generate the reading: {err}"));
                }
            },
            None => {
                warning =
                    Some("Unable to generate the reading: no reading generator is available.".to_string());
            }
        }
    }

    note.set_field(0, text.clone());
    note.set_field(1, notes_field);

    if store.is_duplicate_or_empty(&note) {
        return Err(AddError::DuplicateOrEmpty);
    }

    let cards = store.add_note(note)?;
    if cards.is_empty() {
        return Err(AddError::NoCards);
    }

    tracing::info!(cards = cards.len(), clozes = items.len(), "added cloze note");

    Ok(AddSummary {
        status: success_status(&text, items.len()),
        cloze_count: items.len(),
        card_count: cards.len(),
        warning,
    })
}

fn cloze_list(request: &ClozeNoteRequest) -> Vec<ClozeItem> {
    match &request.targets {
        TargetSource::Annotations => parse_annotations(&request.notes),
        TargetSource::Manual { entries, split } => split_targets(entries, *split)
            .into_iter()
            .map(ClozeItem::bare)
            .collect(),
    }
}

/// Note fields are HTML; raw newlines would collapse when rendered.
fn nl_to_br(text: &str) -> String {
    text.replace('\n', "<br>")
}

const EXCERPT_CHARS: usize = 10;

fn success_status(text: &str, cloze_count: usize) -> String {
    let mut excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
    excerpt = excerpt.replace('\n', " ");
    if text.chars().count() > EXCERPT_CHARS {
        excerpt.push_str("...");
    }
    let suffix = if cloze_count <= 1 { "" } else { "s" };
    format!("Added a new note '{excerpt}' with {cloze_count} cloze{suffix}.")
}
