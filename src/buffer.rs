//! Text buffer abstraction between the editor host and the engine.
//!
//! The engine treats the editable text as an abstract read-only sequence
//! of codepoints; [`TextSource`] is the only surface it sees. The host
//! guarantees no mutation for the synchronous lifetime of a request,
//! which [`SharedBuffer`] delivers by handing out snapshots.

use std::sync::{Arc, RwLock};

/// Read-only view of one open document.
pub trait TextSource: Send + Sync {
    /// Full document contents as they stand at request time.
    fn snapshot(&self) -> String;
}

/// Shared, mutable document contents.
///
/// Clones share the same underlying text. Completion requests read a
/// snapshot, so a proposal list reflects the text exactly as it stood
/// when the request was issued, even if the buffer changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    contents: Arc<RwLock<String>>,
}

impl SharedBuffer {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(initial.into())),
        }
    }

    /// Replace the entire document.
    pub fn replace(&self, contents: impl Into<String>) {
        *self.contents.write().unwrap() = contents.into();
    }

    /// Insert text at a byte offset. The offset must lie on a codepoint
    /// boundary; that is part of the host contract for cursor positions.
    pub fn insert(&self, offset: usize, text: &str) {
        self.contents.write().unwrap().insert_str(offset, text);
    }

    /// Byte length of the current contents.
    pub fn len(&self) -> usize {
        self.contents.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.read().unwrap().is_empty()
    }
}

impl TextSource for SharedBuffer {
    fn snapshot(&self) -> String {
        self.contents.read().unwrap().clone()
    }
}
