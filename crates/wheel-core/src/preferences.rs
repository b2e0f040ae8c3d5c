//! Preferences that outlive a session: the sound flag and saved categories.
//!
//! Each value lives under its own key as JSON, and every change rewrites the
//! whole value for that key.

use tracing::{debug, warn};

use crate::category::CategoryCatalog;
use crate::collab::KeyValueStore;
use crate::error::{WheelError, WheelResult};

/// Store key for the JSON list of user categories.
pub const CATEGORIES_KEY: &str = "customCategories";

/// Store key for the JSON sound flag.
pub const SOUND_KEY: &str = "soundEnabled";

/// Session-independent settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Whether audio cues play.
    pub sound_enabled: bool,
    /// Built-in plus saved categories.
    pub categories: CategoryCatalog,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            categories: CategoryCatalog::new(),
        }
    }
}

impl Preferences {
    /// Read preferences, falling back to defaults for missing or unreadable keys.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut prefs = Self::default();

        if let Some(raw) = store.get(CATEGORIES_KEY) {
            match serde_json::from_str(&raw) {
                Ok(catalog) => prefs.categories = catalog,
                Err(e) => warn!(error = %e, "ignoring unreadable saved categories"),
            }
        }

        if let Some(raw) = store.get(SOUND_KEY) {
            match serde_json::from_str(&raw) {
                Ok(enabled) => prefs.sound_enabled = enabled,
                Err(e) => warn!(error = %e, "ignoring unreadable sound preference"),
            }
        }

        debug!(
            sound = prefs.sound_enabled,
            categories = prefs.categories.custom().len(),
            "loaded preferences"
        );
        prefs
    }

    /// Write the full user category set.
    pub fn save_categories(&self, store: &mut dyn KeyValueStore) -> WheelResult<()> {
        let json = serde_json::to_string(&self.categories)?;
        store.set(CATEGORIES_KEY, &json).map_err(WheelError::Store)
    }

    /// Write the sound flag.
    pub fn save_sound(&self, store: &mut dyn KeyValueStore) -> WheelResult<()> {
        let json = serde_json::to_string(&self.sound_enabled)?;
        store.set(SOUND_KEY, &json).map_err(WheelError::Store)
    }
}
