//! Minimal editor window and view model.
//!
//! Just enough host surface for the plugin lifecycle: a view couples a
//! document buffer with its completion registry, a window holds tabbed
//! views and tracks which one is active.

use std::sync::Arc;

use crate::buffer::SharedBuffer;
use crate::host::registry::CompletionRegistry;

/// One open document view.
pub struct View {
    buffer: SharedBuffer,
    completion: CompletionRegistry,
}

impl View {
    pub fn new(buffer: SharedBuffer) -> Self {
        Self {
            buffer,
            completion: CompletionRegistry::new(),
        }
    }

    /// The document shown in this view.
    pub fn buffer(&self) -> &SharedBuffer {
        &self.buffer
    }

    /// The view's completion registry.
    pub fn completion(&self) -> &CompletionRegistry {
        &self.completion
    }
}

/// A window with tabbed views.
pub struct EditorWindow {
    views: Vec<Arc<View>>,
    active: Option<usize>,
}

impl EditorWindow {
    pub fn new() -> Self {
        Self {
            views: Vec::new(),
            active: None,
        }
    }

    /// Open a new tab for `buffer`, make it active, and return its view
    /// so the host can notify plugins.
    pub fn add_tab(&mut self, buffer: SharedBuffer) -> Arc<View> {
        let view = Arc::new(View::new(buffer));
        self.views.push(Arc::clone(&view));
        self.active = Some(self.views.len() - 1);
        view
    }

    /// The currently focused view, if any tab is open.
    pub fn active_view(&self) -> Option<&Arc<View>> {
        self.active.and_then(|index| self.views.get(index))
    }

    /// Switch focus to the tab at `index`.
    ///
    /// # Returns
    /// * `bool` - False when no such tab exists
    pub fn set_active(&mut self, index: usize) -> bool {
        if index < self.views.len() {
            self.active = Some(index);
            true
        } else {
            false
        }
    }

    /// All open views, in tab order.
    pub fn views(&self) -> &[Arc<View>] {
        &self.views
    }
}

impl Default for EditorWindow {
    fn default() -> Self {
        Self::new()
    }
}
