use crate::error::SdkResult;
use crate::settings::ViewSettings;

/// Persistence for [`ViewSettings`].
///
/// Front ends load settings once at startup, pass the value explicitly to
/// rendering, and save it back after the user changes something.
pub trait SettingsStore: Send + Sync {
    /// Load the stored settings. A store with nothing saved yet returns
    /// the defaults.
    fn load(&self) -> SdkResult<ViewSettings>;

    /// Replace the stored settings.
    fn save(&self, settings: &ViewSettings) -> SdkResult<()>;

    /// Load, apply `f`, save, and return the updated settings.
    fn update(&self, f: &mut dyn FnMut(&mut ViewSettings) -> SdkResult<()>) -> SdkResult<ViewSettings> {
        let mut settings = self.load()?;
        f(&mut settings)?;
        self.save(&settings)?;
        Ok(settings)
    }
}
