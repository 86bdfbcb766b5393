//! Host boundary for editors embedding docwords.
//!
//! Everything here abstracts the editor side of the contract away from
//! any concrete UI toolkit:
//!
//! - **provider**: the dynamic completion-provider interface and the
//!   document-words implementation
//! - **registry**: per-view provider/trigger bookkeeping
//! - **view**: the minimal window/view model the lifecycle needs
//! - **plugin**: lifecycle trait, the words plugin, and the dispatching
//!   plugin host
//!
//! # Examples
//!
//! ```
//! use docwords::buffer::SharedBuffer;
//! use docwords::completion::PROVIDER_NAME;
//! use docwords::host::{EditorWindow, PluginHost, WordsPlugin};
//!
//! let mut host = PluginHost::new();
//! host.register(Box::new(WordsPlugin::new())).unwrap();
//!
//! let mut window = EditorWindow::new();
//! let view = window.add_tab(SharedBuffer::new("alpha alphabet alp"));
//! host.activate_all(&window).unwrap();
//!
//! let provider = view.completion().provider(PROVIDER_NAME).unwrap();
//! let proposals = provider.proposals(18);
//! assert_eq!(proposals[0].label, "alpha");
//! ```

pub mod plugin;
pub mod provider;
pub mod registry;
pub mod view;

// Re-export commonly used types
pub use plugin::{Plugin, PluginHost, PluginMetadata, WordsPlugin};
pub use provider::{CompletionProvider, WordsProvider};
pub use registry::{CompletionRegistry, Trigger, USER_REQUEST_TRIGGER, WORDS_TRIGGER};
pub use view::{EditorWindow, View};
