//! Word completion engine for document text.
//!
//! This module implements the core of docwords: scanning the open
//! document for distinct words and offering the ones that extend the
//! word currently being typed.
//!
//! # Architecture
//!
//! The engine consists of several components:
//!
//! - **Tokenizer**: classifies codepoints, iterates word boundaries and
//!   extracts the word fragment preceding the cursor
//! - **Vocabulary**: one full-document pass into a deduplicated word set
//! - **Proposal**: acceptance filtering, the hard proposal cap, and the
//!   sort policy
//! - **Engine**: binds a text source and orchestrates one atomic request
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use docwords::buffer::SharedBuffer;
//! use docwords::completion::WordCompletionEngine;
//!
//! let buffer = SharedBuffer::new("reactor reaction rea");
//! let engine = WordCompletionEngine::new(Arc::new(buffer.clone()));
//!
//! // Complete the trailing "rea"
//! let proposals = engine.proposals_at(buffer.len());
//! let labels: Vec<_> = proposals.iter().map(|p| p.label.as_str()).collect();
//! assert_eq!(labels, vec!["reactor", "reaction"]);
//! ```

mod engine;
mod proposal;
mod tokenizer;
mod vocabulary;

pub use engine::{PROVIDER_NAME, WordCompletionEngine};
pub use proposal::{Icon, Proposal, SortPolicy, filter_proposal, is_acceptable};
pub use tokenizer::{Words, clean_fragment, is_separator, is_word_char, word_fragment_before};
pub use vocabulary::build_vocabulary;
