//! Core types for cloze note generation.

use serde::{Deserialize, Serialize};

/// A single cloze target: the answer text and an optional hint.
///
/// Items are numbered 1..N by their position in the list, and that number
/// becomes the cloze group index in the final marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClozeItem {
    pub word: String,
    pub hint: String,
}

impl ClozeItem {
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
        }
    }

    /// Target without a hint, as produced by the delimited entry modes.
    pub fn bare(word: impl Into<String>) -> Self {
        Self::new(word, "")
    }
}

/// How target words are matched in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Replace every literal occurrence, including inside other words.
    Substring,
    /// Replace only matches bounded by Unicode word boundaries.
    WholeWord,
}

impl Default for MatchMode {
    fn default() -> Self {
        Self::Substring
    }
}

/// Splitting strategy for manually entered target lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Split on single spaces; ideographic spaces are normalized first.
    Space,
    /// Split on semicolons.
    Semicolon,
    /// One target per character, for scripts without word delimiters.
    Chars,
}

impl Default for SplitMode {
    fn default() -> Self {
        Self::Space
    }
}

/// Where the cloze targets for a note come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSource {
    /// Derive targets from the `..`/`--` markers in the notes block.
    Annotations,
    /// Split a manually entered string of targets.
    Manual { entries: String, split: SplitMode },
}

impl Default for TargetSource {
    fn default() -> Self {
        Self::Annotations
    }
}
