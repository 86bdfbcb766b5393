//! Completion provider boundary between the engine and the host UI.
//!
//! [`CompletionProvider`] is the dynamic interface a completion popup
//! drives; [`WordsProvider`] is the document-words implementation,
//! a thin adapter over [`WordCompletionEngine`].

use std::sync::Arc;

use crate::buffer::TextSource;
use crate::completion::{Icon, Proposal, SortPolicy, WordCompletionEngine};
use crate::config::CompletionConfig;

/// Interface the host's completion machinery uses to drive a provider.
pub trait CompletionProvider: Send + Sync {
    /// Stable provider identifier, used to avoid double registration.
    fn name(&self) -> &str;

    /// Icon representing the provider in the popup header.
    fn icon(&self) -> &Arc<Icon>;

    /// Produce proposals for the bound document at `cursor`.
    fn proposals(&self, cursor: usize) -> Vec<Proposal>;

    /// Narrow an already-displayed proposal against newly typed text.
    fn filter_proposal(&self, label: &str, criteria: &str) -> bool;

    /// Whether the provider participates in automatic, typing-driven
    /// completion in addition to explicit user requests.
    fn interactive(&self) -> bool {
        true
    }
}

/// Document-words completion provider.
pub struct WordsProvider {
    engine: WordCompletionEngine,
}

impl WordsProvider {
    /// Create a provider bound to one document.
    ///
    /// # Arguments
    /// * `source` - The document the provider completes from
    pub fn new(source: Arc<dyn TextSource>) -> Self {
        Self {
            engine: WordCompletionEngine::new(source),
        }
    }

    /// Create a provider honoring the host's completion preferences.
    pub fn with_config(source: Arc<dyn TextSource>, config: &CompletionConfig) -> Self {
        Self {
            engine: WordCompletionEngine::with_config(source, config),
        }
    }

    pub fn sort_policy(&self) -> SortPolicy {
        self.engine.sort_policy()
    }

    pub fn set_sort_policy(&mut self, policy: SortPolicy) {
        self.engine.set_sort_policy(policy);
    }
}

impl CompletionProvider for WordsProvider {
    fn name(&self) -> &str {
        self.engine.name()
    }

    fn icon(&self) -> &Arc<Icon> {
        self.engine.icon()
    }

    fn proposals(&self, cursor: usize) -> Vec<Proposal> {
        self.engine.proposals_at(cursor)
    }

    fn filter_proposal(&self, label: &str, criteria: &str) -> bool {
        self.engine.filter_proposal(label, criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::SharedBuffer;
    use crate::completion::PROVIDER_NAME;

    fn create_test_provider(text: &str) -> WordsProvider {
        WordsProvider::new(Arc::new(SharedBuffer::new(text)))
    }

    #[test]
    fn test_provider_identity() {
        let provider = create_test_provider("");
        assert_eq!(provider.name(), PROVIDER_NAME);
        assert!(provider.interactive());
    }

    #[test]
    fn test_proposals_delegate_to_engine() {
        let text = "window windows win";
        let provider = create_test_provider(text);
        let proposals = provider.proposals(text.len());

        let labels: Vec<&str> = proposals.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["window", "windows"]);
    }

    #[test]
    fn test_filter_narrows_displayed_list() {
        let provider = create_test_provider("");
        assert!(provider.filter_proposal("windows", "windo"));
        assert!(!provider.filter_proposal("windows", "wind0"));
    }

    #[test]
    fn test_sort_policy_is_adjustable() {
        let mut provider = create_test_provider("");
        provider.set_sort_policy(SortPolicy::Unsorted);
        assert_eq!(provider.sort_policy(), SortPolicy::Unsorted);
    }
}
