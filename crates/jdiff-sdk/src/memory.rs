use std::sync::RwLock;

use crate::error::SdkResult;
use crate::settings::ViewSettings;
use crate::traits::SettingsStore;

/// In-memory settings store for tests and embedding.
pub struct InMemorySettingsStore {
    settings: RwLock<ViewSettings>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::with_settings(ViewSettings::default())
    }

    pub fn with_settings(settings: ViewSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> SdkResult<ViewSettings> {
        Ok(self.settings.read().expect("lock poisoned").clone())
    }

    fn save(&self, settings: &ViewSettings) -> SdkResult<()> {
        *self.settings.write().expect("lock poisoned") = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_defaults() {
        let store = InMemorySettingsStore::new();
        assert_eq!(store.load().unwrap(), ViewSettings::default());
    }

    #[test]
    fn save_then_load() {
        let store = InMemorySettingsStore::new();
        let mut s = ViewSettings::default();
        s.color = false;
        store.save(&s).unwrap();
        assert!(!store.load().unwrap().color);
    }

    #[test]
    fn update_persists_changes() {
        let store = InMemorySettingsStore::new();
        let updated = store
            .update(&mut |s| s.set("column_width", "90"))
            .unwrap();
        assert_eq!(updated.column_width, 90);
        assert_eq!(store.load().unwrap().column_width, 90);
    }

    #[test]
    fn failed_update_leaves_store_untouched() {
        let store = InMemorySettingsStore::new();
        assert!(store.update(&mut |s| s.set("column_width", "wide")).is_err());
        assert_eq!(store.load().unwrap(), ViewSettings::default());
    }
}
