use super::tabs::ActivePanel;
use leptos::prelude::*;

/// App-wide state shared through context: which tab is visible, plus
/// the planning-board → pegging hand-off slot.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_panel: RwSignal<ActivePanel>,
    /// Material pushed by the planning board; the pegging panel takes
    /// it on activation and fetches as if the user had submitted it.
    pub pegging_material: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        AppGlobalContext {
            active_panel: RwSignal::new(ActivePanel::Overview),
            pegging_material: RwSignal::new(None),
        }
    }

    /// Jump to the pegging tab with an externally supplied material.
    pub fn open_pegging(&self, material: String) {
        self.pegging_material.set(Some(material));
        self.active_panel.set(ActivePanel::Pegging);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
