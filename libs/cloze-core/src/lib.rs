//! Core cloze note generation library.
//!
//! Provides:
//! - Annotation parser deriving ordered cloze target lists from a notes block
//! - Two-phase cloze substitution with overlap and embedding protection
//! - Note store contract and the note creation flow built on it

pub mod error;
pub mod note;
pub mod parser;
pub mod store;
pub mod substitute;
pub mod types;

pub use error::{AddError, ReadingError, Result, StoreError};
pub use note::{add_cloze_note, AddSummary, ClozeNoteRequest};
pub use parser::{parse_annotations, split_targets};
pub use store::{ModelKind, Note, NoteModel, NoteStore, ReadingGenerator};
pub use substitute::apply;
pub use types::{ClozeItem, MatchMode, SplitMode, TargetSource};
