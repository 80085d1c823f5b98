//! Per-viewport control session.
//!
//! A [`Session`] owns everything one viewport needs between events: the
//! operator with its settings, the input tracker, the settings panel state,
//! and the store settings persist to. It runs the per-event cycle:
//!
//! 1. load settings from the store, once;
//! 2. fold the event into a snapshot and dispatch it;
//! 3. while the panel is open, save settings back and flush.

use crate::camera::{CameraOperator, ViewportHost};
use crate::error::OrbitpadError;
use crate::input::{InputEvent, InputTracker};
use crate::panel::{PanelEdit, SettingsPanel};
use crate::settings::{KeyValueStore, PersistKeys, Settings};

/// Camera control session over a settings store.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    operator: CameraOperator,
    tracker: InputTracker,
    panel: SettingsPanel,
    store: S,
    keys: PersistKeys,
    loaded: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Session over `store` with the default key prefix.
    pub fn new(store: S) -> Self {
        Self::with_keys(store, PersistKeys::default())
    }

    /// Session over `store`, persisting under `keys`.
    pub fn with_keys(store: S, keys: PersistKeys) -> Self {
        Self {
            operator: CameraOperator::default(),
            tracker: InputTracker::new(),
            panel: SettingsPanel::new(),
            store,
            keys,
            loaded: false,
        }
    }

    /// Handle one raw event against `host`. Returns `true` if the event was
    /// consumed and the host must skip its own handling.
    ///
    /// Persistence failures are logged and never reach the caller.
    pub fn handle_event<H: ViewportHost + ?Sized>(
        &mut self,
        event: InputEvent,
        host: &mut H,
    ) -> bool {
        self.ensure_loaded();

        let consumed = self
            .tracker
            .handle_event(event)
            .is_some_and(|snapshot| {
                self.operator.on_input_event(&snapshot, host)
            });

        if self.panel.is_open() {
            if let Err(e) = self.save() {
                log::error!("failed to save camera settings: {e}");
            }
        }
        consumed
    }

    /// Load settings from the store unless already loaded this session.
    pub fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.reload();
        }
    }

    /// Load settings from the store now, even if already loaded.
    pub fn reload(&mut self) {
        self.operator
            .settings_mut()
            .load_from_store(&self.store, &self.keys);
        self.loaded = true;
    }

    /// Write settings to the store and flush it.
    ///
    /// # Errors
    ///
    /// Whatever the store's flush reports.
    pub fn save(&mut self) -> Result<(), OrbitpadError> {
        self.operator
            .settings()
            .save_to_store(&mut self.store, &self.keys);
        self.store.flush()
    }

    /// Apply a settings panel edit. Returns `true` if anything changed.
    pub fn apply_edit(&mut self, edit: PanelEdit) -> bool {
        self.ensure_loaded();
        self.operator.settings_mut().apply_edit(edit)
    }

    /// Whether settings have been loaded this session.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        self.operator.settings()
    }

    /// The camera operator.
    #[must_use]
    pub fn operator(&self) -> &CameraOperator {
        &self.operator
    }

    /// Settings panel state.
    #[must_use]
    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    /// Mutable settings panel state.
    pub fn panel_mut(&mut self) -> &mut SettingsPanel {
        &mut self.panel
    }

    /// The input tracker, e.g. to reset it when the viewport loses focus.
    pub fn tracker_mut(&mut self) -> &mut InputTracker {
        &mut self.tracker
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session, returning its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
