use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SdkError, SdkResult};
use crate::settings::ViewSettings;
use crate::traits::SettingsStore;

/// Settings persisted as a TOML file.
///
/// A missing file loads as the defaults; the file (and its parent
/// directory) is created on the first save.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> SdkResult<ViewSettings> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file, using defaults");
                return Ok(ViewSettings::default());
            }
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&text).map_err(|e| {
            SdkError::Settings(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&self, settings: &ViewSettings) -> SdkResult<()> {
        let text = toml::to_string_pretty(settings)
            .map_err(|e| SdkError::Settings(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("absent.toml"));
        assert_eq!(store.load().unwrap(), ViewSettings::default());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("nested/jdiff.toml"));
        let mut s = ViewSettings::default();
        s.set("context_lines", "2").unwrap();
        s.set("color", "false").unwrap();
        store.save(&s).unwrap();

        let loaded = FileSettingsStore::new(store.path()).load().unwrap();
        assert_eq!(loaded, s);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jdiff.toml");
        fs::write(&path, "column_width = 100\n").unwrap();
        let loaded = FileSettingsStore::new(&path).load().unwrap();
        assert_eq!(loaded.column_width, 100);
        assert!(loaded.show_summary);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jdiff.toml");
        fs::write(&path, "column_width = \"wide\"\n").unwrap();
        let err = FileSettingsStore::new(&path).load().unwrap_err();
        assert!(matches!(err, SdkError::Settings(_)));
    }
}
