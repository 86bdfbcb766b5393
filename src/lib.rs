//! Document Word Completion Library
//!
//! This library provides a "words" autocompletion engine for text
//! editors: it scans the open document for distinct words, filters them
//! against the word currently being typed, and offers the matches as
//! completion proposals. Around the engine sits a toolkit-agnostic host
//! boundary - a completion-provider trait, per-view registries with
//! trigger descriptions, and a plugin lifecycle.
//!
//! # Modules
//!
//! - `buffer`: text source abstraction and shared document buffer
//! - `completion`: the word completion engine (tokenizer, vocabulary,
//!   proposals)
//! - `config`: configuration management
//! - `error`: error types and handling
//! - `host`: provider/registry/plugin boundary for editor hosts
//! - `logging`: tracing subscriber initialization
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use docwords::buffer::SharedBuffer;
//! use docwords::completion::WordCompletionEngine;
//!
//! let buffer = SharedBuffer::new("editor editing edit");
//! let engine = WordCompletionEngine::new(Arc::new(buffer.clone()));
//!
//! // Complete the trailing "edit"
//! let proposals = engine.proposals_at(buffer.len());
//! let labels: Vec<_> = proposals.iter().map(|p| p.label.as_str()).collect();
//! assert_eq!(labels, vec!["editor", "editing"]);
//! ```

pub mod buffer;
pub mod completion;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;

// Re-export commonly used types
pub use buffer::{SharedBuffer, TextSource};
pub use completion::{Proposal, SortPolicy, WordCompletionEngine};
pub use config::Config;
pub use error::{DocwordsError, Result};
pub use host::{CompletionProvider, EditorWindow, Plugin, PluginHost, WordsPlugin};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
