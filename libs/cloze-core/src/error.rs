//! Error types for cloze-core.

use thiserror::Error;

/// Result type alias for the note creation flow.
pub type Result<T> = std::result::Result<T, AddError>;

/// Failures surfaced by a [`NoteStore`](crate::store::NoteStore)
/// implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no default note type is configured")]
    NoDefaultNoteType,

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Failure of an optional reading generator.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ReadingError(pub String);

/// Errors that can abort note creation.
///
/// Reading-generation failures are deliberately absent: they downgrade to a
/// warning on the returned summary instead of aborting the add.
#[derive(Debug, Error)]
pub enum AddError {
    #[error("'{name}' is not a cloze note type")]
    NotClozeModel { name: String },

    #[error("note is empty or a duplicate")]
    DuplicateOrEmpty,

    #[error("the note did not generate any cards")]
    NoCards,

    #[error(transparent)]
    Store(#[from] StoreError),
}
