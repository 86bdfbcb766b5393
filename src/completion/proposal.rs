//! Proposal construction, filtering and ordering.
//!
//! Candidate words from the vocabulary pass through an acceptance
//! filter, accumulate into a capped list of [`Proposal`]s, and are
//! finally ordered by the active [`SortPolicy`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque decorative icon handle.
///
/// Carries only a symbolic name; resolving it against a real icon theme
/// is the UI host's business. Icons are loaded once at engine
/// construction and shared read-only across all requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    name: String,
}

impl Icon {
    pub fn from_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A single candidate completion offered to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    /// The word to insert.
    pub label: String,
    /// Decorative hint rendered next to the label.
    pub icon: Arc<Icon>,
}

/// Ordering rule applied to the proposal list before it is returned.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Leave proposals in accumulation order (unspecified).
    Unsorted,

    /// Stable sort ascending by codepoint length of the label; ties keep
    /// their accumulation order.
    #[default]
    ByLabelLength,
}

/// Decide whether a vocabulary word may be offered against the word
/// currently being typed.
///
/// Candidates shorter than `min_len` codepoints are never offered. With
/// no current word every remaining candidate qualifies; otherwise the
/// candidate must extend the current word as a literal prefix, and the
/// already fully-typed word itself is never proposed back.
pub fn is_acceptable(current: Option<&str>, candidate: &str, min_len: usize) -> bool {
    if candidate.chars().count() < min_len {
        return false;
    }

    let current = match current {
        Some(word) if !word.is_empty() => word,
        _ => return true,
    };

    if candidate == current {
        return false;
    }

    candidate.starts_with(current)
}

/// Accumulate accepted words into proposals, stopping at `cap`, then
/// apply the sort policy.
///
/// The cap is hard: once `cap` proposals have been accepted, remaining
/// words are skipped entirely rather than collected and truncated after
/// sorting. Input order is implementation-defined (the vocabulary is a
/// set), so callers must not rely on tie order under `ByLabelLength`.
pub fn generate_proposals<'a, I>(
    words: I,
    current: Option<&str>,
    icon: &Arc<Icon>,
    policy: SortPolicy,
    min_len: usize,
    cap: usize,
) -> Vec<Proposal>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut proposals = Vec::new();

    for word in words {
        if proposals.len() >= cap {
            break;
        }
        if is_acceptable(current, word, min_len) {
            proposals.push(Proposal {
                label: word.clone(),
                icon: Arc::clone(icon),
            });
        }
    }

    match policy {
        SortPolicy::Unsorted => {}
        SortPolicy::ByLabelLength => {
            proposals.sort_by_key(|p| p.label.chars().count());
        }
    }

    proposals
}

/// Narrow an already-displayed proposal by the text typed since the list
/// was produced. A cheap literal prefix test; no vocabulary rebuild.
pub fn filter_proposal(label: &str, criteria: &str) -> bool {
    label.starts_with(criteria)
}
