//! Per-view completion registry.
//!
//! Each view owns one registry tracking which providers are attached
//! and which triggers may fire them. Triggers are descriptions - a key
//! chord or an idle delay - telling the UI host *when* to ask providers
//! for proposals; the actual key and timer plumbing lives in the host.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{RegistryError, Result};
use crate::host::provider::CompletionProvider;

/// Name of the explicit user-request trigger.
pub const USER_REQUEST_TRIGGER: &str = "user-request";

/// Name of the automatic words trigger.
pub const WORDS_TRIGGER: &str = "words";

/// Description of when the completion popup should request proposals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Explicit user request bound to a key chord.
    UserRequest { keybinding: String },

    /// Automatic firing after a typing-inactivity delay following a
    /// word-constituent keystroke.
    Words { delay: Duration },
}

/// Registry of completion providers and triggers for one view.
pub struct CompletionRegistry {
    /// Attached providers, keyed by provider name
    providers: RwLock<HashMap<String, Arc<dyn CompletionProvider>>>,

    /// Known triggers, keyed by trigger name
    triggers: RwLock<HashMap<String, Trigger>>,

    /// Trigger names each provider is attached to
    attachments: RwLock<HashMap<String, Vec<String>>>,
}

impl CompletionRegistry {
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(HashMap::new()),
            triggers: RwLock::new(HashMap::new()),
            attachments: RwLock::new(HashMap::new()),
        }
    }

    /// Attach a provider to this view.
    ///
    /// # Arguments
    /// * `provider` - The provider to register
    ///
    /// # Returns
    /// * `Result<()>` - Error when a provider of that name is present
    pub fn add_provider(&self, provider: Arc<dyn CompletionProvider>) -> Result<()> {
        let name = provider.name().to_string();
        let mut providers = self.providers.write().unwrap();

        if providers.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name).into());
        }

        providers.insert(name, provider);
        Ok(())
    }

    /// Look up a provider by name.
    pub fn provider(&self, name: &str) -> Option<Arc<dyn CompletionProvider>> {
        self.providers.read().unwrap().get(name).cloned()
    }

    /// Check whether a provider of that name is attached.
    pub fn has_provider(&self, name: &str) -> bool {
        self.providers.read().unwrap().contains_key(name)
    }

    /// Detach a provider, dropping its trigger attachments.
    ///
    /// # Returns
    /// * `Result<Arc<dyn CompletionProvider>>` - The detached provider
    pub fn remove_provider(&self, name: &str) -> Result<Arc<dyn CompletionProvider>> {
        let provider = self
            .providers
            .write()
            .unwrap()
            .remove(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        self.attachments.write().unwrap().remove(name);
        Ok(provider)
    }

    /// Names of all attached providers.
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.read().unwrap().keys().cloned().collect()
    }

    /// Register a trigger under `name` unless one already exists.
    pub fn ensure_trigger(&self, name: &str, trigger: Trigger) {
        self.triggers
            .write()
            .unwrap()
            .entry(name.to_string())
            .or_insert(trigger);
    }

    /// Look up a trigger by name.
    pub fn trigger(&self, name: &str) -> Option<Trigger> {
        self.triggers.read().unwrap().get(name).cloned()
    }

    /// Associate a registered provider with a registered trigger.
    /// Attaching twice is a no-op.
    pub fn attach(&self, provider_name: &str, trigger_name: &str) -> Result<()> {
        if !self.has_provider(provider_name) {
            return Err(RegistryError::NotFound(provider_name.to_string()).into());
        }
        if self.trigger(trigger_name).is_none() {
            return Err(RegistryError::NotFound(trigger_name.to_string()).into());
        }

        let mut attachments = self.attachments.write().unwrap();
        let triggers = attachments.entry(provider_name.to_string()).or_default();
        if !triggers.iter().any(|t| t == trigger_name) {
            triggers.push(trigger_name.to_string());
        }
        Ok(())
    }

    /// Providers that should fire for the named trigger.
    pub fn providers_for_trigger(&self, trigger_name: &str) -> Vec<Arc<dyn CompletionProvider>> {
        let names: Vec<String> = {
            let attachments = self.attachments.read().unwrap();
            attachments
                .iter()
                .filter(|(_, triggers)| triggers.iter().any(|t| t == trigger_name))
                .map(|(name, _)| name.clone())
                .collect()
        };

        names
            .iter()
            .filter_map(|name| self.provider(name))
            .collect()
    }
}

impl Default for CompletionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
