//! Plugin lifecycle for editor hosts.
//!
//! This module re-expresses the editor's dynamic plugin interface as an
//! explicit trait:
//! - Plugin trait with lifecycle callbacks (activate, deactivate,
//!   update_ui, tab_added)
//! - Plugin metadata
//! - [`WordsPlugin`], which attaches the document-words completion
//!   provider and its triggers to views
//! - [`PluginHost`], which owns registered plugins and dispatches
//!   lifecycle events to them

use std::sync::Arc;

use tracing::debug;

use crate::completion::PROVIDER_NAME;
use crate::config::{CompletionConfig, Config, KeybindingConfig};
use crate::error::{RegistryError, Result};
use crate::host::provider::WordsProvider;
use crate::host::registry::{Trigger, USER_REQUEST_TRIGGER, WORDS_TRIGGER};
use crate::host::view::{EditorWindow, View};

/// Interface every editor plugin implements.
///
/// The host calls `activate` once per window when the plugin is turned
/// on, `deactivate` when it is turned off, `update_ui` whenever the
/// window state changes (tab switched, document loaded), and
/// `tab_added` for each newly opened tab.
pub trait Plugin: Send + Sync {
    /// Unique plugin name
    fn name(&self) -> &str;

    /// Plugin version (semver format)
    fn version(&self) -> &str;

    /// Plugin metadata
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: self.name().to_string(),
            version: self.version().to_string(),
            author: "Unknown".to_string(),
            description: "No description".to_string(),
        }
    }

    /// Turn the plugin on for `window`.
    fn activate(&mut self, window: &EditorWindow) -> Result<()>;

    /// Turn the plugin off for `window`, undoing `activate`.
    fn deactivate(&mut self, window: &EditorWindow) -> Result<()>;

    /// React to window state changes.
    fn update_ui(&mut self, window: &EditorWindow) -> Result<()>;

    /// React to a newly opened tab.
    fn tab_added(&mut self, _view: &View) -> Result<()> {
        Ok(())
    }
}

/// Plugin metadata information
#[derive(Debug, Clone)]
pub struct PluginMetadata {
    /// Plugin name
    pub name: String,

    /// Plugin version
    pub version: String,

    /// Plugin author
    pub author: String,

    /// Plugin description
    pub description: String,
}

/// The document-words completion plugin.
///
/// Attaches a [`WordsProvider`] to each view it learns about, together
/// with the user-request trigger and - when automatic completion is
/// enabled - the idle-delay words trigger. Registration is idempotent:
/// a view that already carries the provider is left untouched.
pub struct WordsPlugin {
    completion: CompletionConfig,
    keybindings: KeybindingConfig,
}

impl WordsPlugin {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            completion: config.completion.clone(),
            keybindings: config.keybindings.clone(),
        }
    }

    /// Attach the words provider and its triggers to one view.
    fn attach_to_view(&self, view: &View) -> Result<()> {
        let completion = view.completion();

        if completion.has_provider(PROVIDER_NAME) {
            return Ok(());
        }

        debug!("adding words provider");
        let provider = WordsProvider::with_config(
            Arc::new(view.buffer().clone()),
            &self.completion,
        );
        completion.add_provider(Arc::new(provider))?;

        completion.ensure_trigger(
            USER_REQUEST_TRIGGER,
            Trigger::UserRequest {
                keybinding: self.keybindings.user_request.clone(),
            },
        );
        completion.attach(PROVIDER_NAME, USER_REQUEST_TRIGGER)?;

        if self.completion.autocompletion_enabled {
            completion.ensure_trigger(
                WORDS_TRIGGER,
                Trigger::Words {
                    delay: std::time::Duration::from_millis(self.completion.idle_delay_ms),
                },
            );
            completion.attach(PROVIDER_NAME, WORDS_TRIGGER)?;
        }
        debug!("provider registered");

        Ok(())
    }
}

impl Default for WordsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for WordsPlugin {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: self.name().to_string(),
            version: self.version().to_string(),
            author: "docwords developers".to_string(),
            description: "Completes words found in the open document".to_string(),
        }
    }

    fn activate(&mut self, window: &EditorWindow) -> Result<()> {
        debug!("words plugin activating");
        // Tabs opened later arrive through tab_added
        for view in window.views() {
            self.attach_to_view(view)?;
        }
        Ok(())
    }

    fn deactivate(&mut self, window: &EditorWindow) -> Result<()> {
        debug!("words plugin deactivating");
        for view in window.views() {
            if view.completion().has_provider(PROVIDER_NAME) {
                view.completion().remove_provider(PROVIDER_NAME)?;
            }
        }
        Ok(())
    }

    fn update_ui(&mut self, window: &EditorWindow) -> Result<()> {
        if let Some(view) = window.active_view() {
            self.attach_to_view(view)?;
        }
        Ok(())
    }

    fn tab_added(&mut self, view: &View) -> Result<()> {
        self.attach_to_view(view)
    }
}

/// Owns registered plugins and dispatches lifecycle events.
pub struct PluginHost {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginHost {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Register a plugin.
    ///
    /// # Returns
    /// * `Result<()>` - Error when a plugin of that name is registered
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Result<()> {
        if self.is_registered(plugin.name()) {
            return Err(RegistryError::AlreadyRegistered(plugin.name().to_string()).into());
        }
        debug!("registering plugin {}", plugin.name());
        self.plugins.push(plugin);
        Ok(())
    }

    /// Check if a plugin is registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    /// Metadata for a registered plugin.
    pub fn metadata(&self, name: &str) -> Option<PluginMetadata> {
        self.plugins
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.metadata())
    }

    /// Activate every registered plugin for `window`.
    pub fn activate_all(&mut self, window: &EditorWindow) -> Result<()> {
        for plugin in &mut self.plugins {
            plugin.activate(window)?;
        }
        Ok(())
    }

    /// Deactivate every registered plugin for `window`.
    pub fn deactivate_all(&mut self, window: &EditorWindow) -> Result<()> {
        for plugin in &mut self.plugins {
            plugin.deactivate(window)?;
        }
        Ok(())
    }

    /// Dispatch a window state change.
    pub fn update_ui(&mut self, window: &EditorWindow) -> Result<()> {
        for plugin in &mut self.plugins {
            plugin.update_ui(window)?;
        }
        Ok(())
    }

    /// Dispatch a newly opened tab.
    pub fn notify_tab_added(&mut self, view: &View) -> Result<()> {
        for plugin in &mut self.plugins {
            plugin.tab_added(view)?;
        }
        Ok(())
    }
}

impl Default for PluginHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::SharedBuffer;
    use crate::error::DocwordsError;

    #[test]
    fn test_tab_added_attaches_provider_and_triggers() {
        let mut window = EditorWindow::new();
        let view = window.add_tab(SharedBuffer::new("alpha beta "));

        let mut plugin = WordsPlugin::new();
        plugin.tab_added(&view).unwrap();

        let completion = view.completion();
        assert!(completion.has_provider(PROVIDER_NAME));
        assert!(completion.trigger(USER_REQUEST_TRIGGER).is_some());
        assert!(completion.trigger(WORDS_TRIGGER).is_some());
        assert_eq!(completion.providers_for_trigger(WORDS_TRIGGER).len(), 1);
    }

    #[test]
    fn test_update_ui_is_idempotent() {
        let mut window = EditorWindow::new();
        window.add_tab(SharedBuffer::new(""));

        let mut plugin = WordsPlugin::new();
        plugin.update_ui(&window).unwrap();
        plugin.update_ui(&window).unwrap();

        let completion = window.active_view().unwrap().completion();
        assert_eq!(completion.provider_names().len(), 1);
    }

    #[test]
    fn test_disabled_autocompletion_skips_words_trigger() {
        let mut config = Config::default();
        config.completion.autocompletion_enabled = false;

        let mut window = EditorWindow::new();
        let view = window.add_tab(SharedBuffer::new(""));
        let mut plugin = WordsPlugin::with_config(&config);
        plugin.tab_added(&view).unwrap();

        let completion = view.completion();
        assert!(completion.trigger(USER_REQUEST_TRIGGER).is_some());
        assert!(completion.trigger(WORDS_TRIGGER).is_none());
    }

    #[test]
    fn test_activate_covers_existing_tabs_and_deactivate_detaches() {
        let mut window = EditorWindow::new();
        window.add_tab(SharedBuffer::new("one"));
        window.add_tab(SharedBuffer::new("two"));

        let mut plugin = WordsPlugin::new();
        plugin.activate(&window).unwrap();
        for view in window.views() {
            assert!(view.completion().has_provider(PROVIDER_NAME));
        }

        plugin.deactivate(&window).unwrap();
        for view in window.views() {
            assert!(!view.completion().has_provider(PROVIDER_NAME));
        }
    }

    #[test]
    fn test_host_rejects_duplicate_plugin() {
        let mut host = PluginHost::new();
        host.register(Box::new(WordsPlugin::new())).unwrap();

        let err = host.register(Box::new(WordsPlugin::new())).unwrap_err();
        assert!(matches!(
            err,
            DocwordsError::Registry(RegistryError::AlreadyRegistered(_))
        ));
    }

    #[test]
    fn test_host_dispatches_lifecycle() {
        let mut host = PluginHost::new();
        host.register(Box::new(WordsPlugin::new())).unwrap();
        assert!(host.is_registered(PROVIDER_NAME));
        assert_eq!(host.metadata(PROVIDER_NAME).unwrap().name, PROVIDER_NAME);

        let mut window = EditorWindow::new();
        let first = window.add_tab(SharedBuffer::new("existing tab"));
        host.activate_all(&window).unwrap();
        assert!(first.completion().has_provider(PROVIDER_NAME));

        let second = window.add_tab(SharedBuffer::new("later tab"));
        host.notify_tab_added(&second).unwrap();
        assert!(second.completion().has_provider(PROVIDER_NAME));

        host.update_ui(&window).unwrap();
        host.deactivate_all(&window).unwrap();
        assert!(!first.completion().has_provider(PROVIDER_NAME));
        assert!(!second.completion().has_provider(PROVIDER_NAME));
    }

    #[test]
    fn test_completion_flows_end_to_end() {
        let mut host = PluginHost::new();
        host.register(Box::new(WordsPlugin::new())).unwrap();

        let mut window = EditorWindow::new();
        let text = "document words completion documents doc";
        let view = window.add_tab(SharedBuffer::new(text));
        host.activate_all(&window).unwrap();

        let provider = view.completion().provider(PROVIDER_NAME).unwrap();
        // Cursor sits after the trailing "doc"
        let proposals = provider.proposals(text.len());
        let labels: Vec<&str> = proposals.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["document", "documents"]);
    }
}
