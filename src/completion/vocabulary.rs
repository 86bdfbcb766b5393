//! Vocabulary construction - one full-document scan per request.
//!
//! The vocabulary is rebuilt from scratch on every completion request:
//! a single O(document length) pass trades per-request cost for
//! always-fresh results and no cache-invalidation logic.

use std::collections::HashSet;
use std::ops::Range;

use super::tokenizer::Words;

/// Scan `text` and collect the distinct words it contains.
///
/// Splitting follows the separator rules in [`super::tokenizer`]; a word
/// seen twice creates a single entry (set semantics, case-sensitive).
/// Entries are non-empty and separator-free by construction.
///
/// `exclude` names the byte span of the word fragment being completed at
/// the cursor; a scanned word whose span coincides exactly is skipped so
/// the in-progress text is not echoed back as its own completion. The
/// downstream filter also rejects exact matches.
pub fn build_vocabulary(text: &str, exclude: Option<Range<usize>>) -> HashSet<String> {
    let mut vocabulary = HashSet::new();

    for (span, word) in Words::new(text) {
        if exclude.as_ref().is_some_and(|excluded| *excluded == span) {
            continue;
        }
        vocabulary.insert(word.to_string());
    }

    vocabulary
}
