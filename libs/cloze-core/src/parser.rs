//! Parser deriving cloze target lists from an annotated notes block.
//!
//! # Format
//! ```text
//! ..photosynthesis
//! --how plants make food
//! Any unmarked line is plain note text and stays untouched.
//! ..chlorophyll
//! ```

use crate::types::{ClozeItem, SplitMode};
use std::collections::HashSet;

/// Two-character marker introducing a target word line.
const WORD_KEY: &str = "..";
/// Two-character marker introducing a hint line.
const HINT_KEY: &str = "--";

/// Parse an annotated notes block into an ordered cloze list.
///
/// Word lines start with `..`, hint lines with `--`; a hint attaches to the
/// word emitted next, so `..word` followed by `--hint` pairs them up. Every
/// other line is ignored by the scan. Duplicate words are kept; an empty
/// block yields an empty list.
pub fn parse_annotations(block: &str) -> Vec<ClozeItem> {
    block.lines().fold(Scan::default(), Scan::line).finish()
}

/// Scan state threaded through the line fold.
#[derive(Default)]
struct Scan {
    items: Vec<ClozeItem>,
    word: String,
    hint: String,
}

impl Scan {
    fn line(mut self, line: &str) -> Self {
        match classify(line) {
            Line::Word(text) => {
                if !self.word.is_empty() {
                    let word = std::mem::take(&mut self.word);
                    let hint = std::mem::take(&mut self.hint);
                    self.items.push(ClozeItem::new(word, hint));
                }
                // A hint with no word to attach to is dropped here.
                self.hint.clear();
                self.word = text.to_string();
            }
            Line::Hint(text) => self.hint = text.to_string(),
            Line::Plain => {}
        }
        self
    }

    fn finish(mut self) -> Vec<ClozeItem> {
        if !self.word.is_empty() {
            self.items.push(ClozeItem::new(self.word, self.hint));
        }
        self.items
    }
}

enum Line<'a> {
    Word(&'a str),
    Hint(&'a str),
    Plain,
}

/// Markers are matched against the raw line start; an indented marker is
/// plain text.
fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix(WORD_KEY) {
        Line::Word(rest.trim())
    } else if let Some(rest) = line.strip_prefix(HINT_KEY) {
        Line::Hint(rest.trim())
    } else {
        Line::Plain
    }
}

/// Split a manually entered target string into bare words.
///
/// Kept for the manual entry workflows that predate annotations. Empty and
/// whitespace-only entries are dropped, and duplicates are removed keeping
/// the first occurrence.
pub fn split_targets(raw: &str, mode: SplitMode) -> Vec<String> {
    let entries: Vec<String> = match mode {
        SplitMode::Space => raw
            .replace('\u{3000}', " ")
            .split(' ')
            .map(str::to_string)
            .collect(),
        SplitMode::Semicolon => raw.split(';').map(str::to_string).collect(),
        SplitMode::Chars => raw.chars().map(String::from).collect(),
    };

    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| !entry.trim().is_empty())
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}
