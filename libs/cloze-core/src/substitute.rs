//! Two-phase cloze substitution.
//!
//! Inserting final markers in a single pass is unsafe: the marker placed for
//! one target contains its answer text, which a later target can re-match,
//! and overlapping source spans corrupt each other. The prepare pass instead
//! swaps every occurrence of a target for a stub carrying only the group
//! index and hint, recording the stub together with its final marker. While
//! that pass runs no answer text from an earlier target is in circulation,
//! and the stub delimiters cannot occur inside a plain target word. The
//! finalize pass then replaces each stub with its recorded marker.

use crate::types::{ClozeItem, MatchMode};
use regex::{NoExpand, Regex};

/// Apply an ordered cloze list to `text`.
///
/// Every occurrence of each target becomes `{{cN::word::hint}}` with N the
/// 1-based list position. Targets that never occur are silent no-ops, and a
/// target occurring several times yields several markers sharing its index.
/// When the same word appears in two items, the earlier item claims every
/// occurrence and the later one finds nothing left to match.
pub fn apply(text: &str, items: &[ClozeItem], mode: MatchMode) -> String {
    let mut buf = text.to_string();

    // Prepare pass: stub every occurrence, recording stub -> final marker.
    let mut markers: Vec<(String, String)> = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        // An empty pattern matches everywhere; never let one through.
        if item.word.is_empty() {
            continue;
        }
        let index = idx + 1;
        let stub = stub(index, &item.hint);
        buf = replace_target(&buf, &item.word, &stub, mode);
        markers.push((stub, marker(index, &item.word, &item.hint)));
    }

    // Finalize pass: reinsert the answer text through the recorded map.
    for (stub, marker) in &markers {
        buf = buf.replace(stub.as_str(), marker);
    }

    buf
}

/// Intermediate marker reserving a match location: group index and hint,
/// answer text omitted.
fn stub(index: usize, hint: &str) -> String {
    format!("{{{{c{index}::::{hint}}}}}")
}

/// Final marker form.
fn marker(index: usize, word: &str, hint: &str) -> String {
    format!("{{{{c{index}::{word}::{hint}}}}}")
}

fn replace_target(text: &str, word: &str, stub: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Substring => text.replace(word, stub),
        MatchMode::WholeWord => {
            let pattern = format!(r"\b{}\b", regex::escape(word));
            // The escaped literal always compiles.
            let re = Regex::new(&pattern).unwrap();
            re.replace_all(text, NoExpand(stub)).into_owned()
        }
    }
}
