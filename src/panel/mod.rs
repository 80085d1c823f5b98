//! Headless settings panel model.
//!
//! The host renders the panel however it likes; this module holds the
//! open/closed state, the edit commands the panel issues, and the binding
//! labels it shows. While the panel is open the session saves settings after
//! every event.

mod edit;

pub use edit::PanelEdit;

use crate::gesture::{Binding, CameraAction};

/// Open/closed state of the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsPanel {
    open: bool,
}

impl SettingsPanel {
    /// A closed panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show or hide the panel. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        log::debug!(
            "settings panel {}",
            if self.open { "opened" } else { "closed" }
        );
        self.open
    }

    /// Set the state explicitly.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

/// Header line for one binding, e.g. `ROTATE: Ctrl + Shift + Scroll`.
#[must_use]
pub fn binding_label(action: CameraAction, binding: &Binding) -> String {
    let name = action.label().to_uppercase();
    binding.trigger.map_or_else(
        || format!("{name}: (unbound)"),
        |gesture| format!("{name}: {gesture}"),
    )
}
