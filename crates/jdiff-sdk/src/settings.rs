use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// How a comparison is presented.
///
/// Passed explicitly to renderers; persisted through a
/// [`SettingsStore`](crate::SettingsStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Colorize output.
    pub color: bool,
    /// Print the field summary below the diff.
    pub show_summary: bool,
    /// Fold unchanged rows farther than this many rows from a change.
    /// `None` shows every row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_lines: Option<usize>,
    /// Width of each side of the side-by-side view, in characters.
    pub column_width: usize,
}

impl ViewSettings {
    pub const DEFAULT_WIDTH: usize = 60;
    pub const MIN_WIDTH: usize = 20;
    pub const MAX_WIDTH: usize = 200;

    /// Setting names accepted by [`get`](Self::get) and [`set`](Self::set).
    pub const KEYS: [&'static str; 4] = ["color", "show_summary", "context_lines", "column_width"];

    /// Widen each column by one character, up to the maximum.
    pub fn widen(&mut self) {
        self.column_width = (self.column_width + 1).min(Self::MAX_WIDTH);
    }

    /// Narrow each column by one character, down to the minimum.
    pub fn narrow(&mut self) {
        self.column_width = self.column_width.saturating_sub(1).max(Self::MIN_WIDTH);
    }

    pub fn reset_width(&mut self) {
        self.column_width = Self::DEFAULT_WIDTH;
    }

    /// Set the column width, clamped to the allowed range.
    pub fn set_width(&mut self, width: usize) {
        self.column_width = width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH);
    }

    /// Read a setting as text.
    pub fn get(&self, key: &str) -> SdkResult<String> {
        match key {
            "color" => Ok(self.color.to_string()),
            "show_summary" => Ok(self.show_summary.to_string()),
            "context_lines" => Ok(self
                .context_lines
                .map(|n| n.to_string())
                .unwrap_or_else(|| "all".into())),
            "column_width" => Ok(self.column_width.to_string()),
            other => Err(SdkError::UnknownSetting(other.to_string())),
        }
    }

    /// Parse and apply a setting from text.
    ///
    /// `context_lines` accepts a number or `all`; widths are clamped.
    pub fn set(&mut self, key: &str, value: &str) -> SdkResult<()> {
        let invalid = || SdkError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "color" => self.color = value.parse().map_err(|_| invalid())?,
            "show_summary" => self.show_summary = value.parse().map_err(|_| invalid())?,
            "context_lines" => {
                self.context_lines = match value {
                    "all" | "none" => None,
                    n => Some(n.parse().map_err(|_| invalid())?),
                }
            }
            "column_width" => self.set_width(value.parse().map_err(|_| invalid())?),
            other => return Err(SdkError::UnknownSetting(other.to_string())),
        }
        Ok(())
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            color: true,
            show_summary: true,
            context_lines: None,
            column_width: Self::DEFAULT_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let s = ViewSettings::default();
        assert!(s.color);
        assert!(s.show_summary);
        assert_eq!(s.context_lines, None);
        assert_eq!(s.column_width, 60);
    }

    #[test]
    fn width_steps_are_bounded() {
        let mut s = ViewSettings::default();
        s.widen();
        assert_eq!(s.column_width, 61);
        s.set_width(1_000);
        s.widen();
        assert_eq!(s.column_width, ViewSettings::MAX_WIDTH);
        s.set_width(0);
        s.narrow();
        assert_eq!(s.column_width, ViewSettings::MIN_WIDTH);
        s.reset_width();
        assert_eq!(s.column_width, ViewSettings::DEFAULT_WIDTH);
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut s = ViewSettings::default();
        s.set("color", "false").unwrap();
        s.set("context_lines", "3").unwrap();
        s.set("column_width", "80").unwrap();
        assert_eq!(s.get("color").unwrap(), "false");
        assert_eq!(s.get("context_lines").unwrap(), "3");
        assert_eq!(s.get("column_width").unwrap(), "80");

        s.set("context_lines", "all").unwrap();
        assert_eq!(s.context_lines, None);
        for key in ViewSettings::KEYS {
            assert!(s.get(key).is_ok());
        }
    }

    #[test]
    fn rejects_unknown_and_invalid() {
        let mut s = ViewSettings::default();
        assert!(matches!(s.set("font", "12"), Err(SdkError::UnknownSetting(_))));
        assert!(matches!(
            s.set("show_summary", "maybe"),
            Err(SdkError::InvalidSetting { .. })
        ));
        assert!(matches!(s.get("font"), Err(SdkError::UnknownSetting(_))));
        assert_eq!(s, ViewSettings::default());
    }
}
