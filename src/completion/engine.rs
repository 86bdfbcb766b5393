//! Word completion engine - orchestrates one completion request.

use std::sync::Arc;

use tracing::debug;

use super::proposal::{self, Icon, Proposal, SortPolicy};
use super::tokenizer;
use super::vocabulary;
use crate::buffer::TextSource;
use crate::config::CompletionConfig;

/// Stable identifier for the words provider, used by hosts to avoid
/// registering the same provider twice on one view.
pub const PROVIDER_NAME: &str = "docwords";

/// The word completion engine.
///
/// Bound to one text source (one open document) for its lifetime. Each
/// request is atomic: the word fragment, the vocabulary and the proposal
/// list are recomputed from the current text and released when the call
/// returns. Only the sort policy persists across requests.
pub struct WordCompletionEngine {
    source: Arc<dyn TextSource>,
    sort_policy: SortPolicy,
    min_word_length: usize,
    proposal_cap: usize,
    provider_icon: Arc<Icon>,
    proposal_icon: Arc<Icon>,
}

impl WordCompletionEngine {
    /// Create an engine with default limits and ordering.
    pub fn new(source: Arc<dyn TextSource>) -> Self {
        Self::with_config(source, &CompletionConfig::default())
    }

    /// Create an engine honoring the host's completion preferences.
    pub fn with_config(source: Arc<dyn TextSource>, config: &CompletionConfig) -> Self {
        Self {
            source,
            sort_policy: config.sort,
            min_word_length: config.min_word_length,
            proposal_cap: config.proposal_cap,
            provider_icon: Arc::new(Icon::from_name("edit-copy")),
            proposal_icon: Arc::new(Icon::from_name("document-new")),
        }
    }

    /// Stable provider identifier.
    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Icon representing the provider itself.
    pub fn icon(&self) -> &Arc<Icon> {
        &self.provider_icon
    }

    pub fn sort_policy(&self) -> SortPolicy {
        self.sort_policy
    }

    pub fn set_sort_policy(&mut self, policy: SortPolicy) {
        self.sort_policy = policy;
    }

    /// Generate completion proposals for the document at `cursor`.
    ///
    /// `cursor` is a byte index into the snapshot; out-of-range or
    /// mid-codepoint positions are clamped. Degenerate inputs (empty
    /// document, cursor at the start) yield an empty list, never an
    /// error.
    pub fn proposals_at(&self, cursor: usize) -> Vec<Proposal> {
        // 1. Snapshot the document for the lifetime of this request
        let text = self.source.snapshot();

        // 2. Locate and normalize the word fragment preceding the cursor
        let (start, fragment) = tokenizer::word_fragment_before(&text, cursor);
        let current = tokenizer::clean_fragment(fragment);

        // 3. Rebuild the vocabulary, skipping the fragment's own span
        let exclude = (!fragment.is_empty()).then(|| start..start + fragment.len());
        let vocabulary = vocabulary::build_vocabulary(&text, exclude);

        // 4. Filter against the fragment, cap, and order
        let proposals = proposal::generate_proposals(
            vocabulary.iter(),
            current,
            &self.proposal_icon,
            self.sort_policy,
            self.min_word_length,
            self.proposal_cap,
        );

        debug!(
            "completion request: fragment {:?}, {} of {} words proposed",
            fragment,
            proposals.len(),
            vocabulary.len()
        );

        proposals
    }

    /// Narrow an already-displayed proposal against further typed text
    /// without rescanning the document.
    pub fn filter_proposal(&self, label: &str, criteria: &str) -> bool {
        proposal::filter_proposal(label, criteria)
    }
}
