//! Editor preferences.
//!
//! Both enums deserialize from their lowercase names, so an unknown value in
//! a config file is rejected while the file is parsed.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which panes the editor shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
  /// Source editor only.
  Edit,
  /// Rendered preview only.
  View,
  /// Editor and preview side by side.
  #[default]
  Split,
}

impl EditorMode {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Edit => "edit",
      Self::View => "view",
      Self::Split => "split",
    }
  }

  /// Whether the source editor (and its toolbar) is visible.
  #[must_use]
  pub const fn shows_editor(self) -> bool {
    matches!(self, Self::Edit | Self::Split)
  }

  /// Whether the rendered preview is visible.
  #[must_use]
  pub const fn shows_preview(self) -> bool {
    matches!(self, Self::View | Self::Split)
  }
}

impl fmt::Display for EditorMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for EditorMode {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "edit" => Ok(Self::Edit),
      "view" => Ok(Self::View),
      "split" => Ok(Self::Split),
      _ => {
        Err(ConfigError::InvalidValue {
          kind:  "editor mode",
          value: s.to_string(),
        })
      },
    }
  }
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

impl Theme {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Light => "light",
      Self::Dark => "dark",
    }
  }

  /// The other theme.
  #[must_use]
  pub const fn toggled(self) -> Self {
    match self {
      Self::Light => Self::Dark,
      Self::Dark => Self::Light,
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Theme {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "light" => Ok(Self::Light),
      "dark" => Ok(Self::Dark),
      _ => {
        Err(ConfigError::InvalidValue {
          kind:  "theme",
          value: s.to_string(),
        })
      },
    }
  }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine in tests")]
mod tests {
  use super::*;

  #[test]
  fn test_parse_is_case_insensitive() {
    assert_eq!("Split".parse::<EditorMode>().unwrap(), EditorMode::Split);
    assert_eq!(" DARK ".parse::<Theme>().unwrap(), Theme::Dark);
  }

  #[test]
  fn test_parse_rejects_unknown_values() {
    let err = "zen".parse::<EditorMode>().unwrap_err();
    assert_eq!(err.to_string(), "Invalid editor mode: 'zen'");
  }

  #[test]
  fn test_toggle_theme() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
  }

  #[test]
  fn test_deserialize_rejects_unknown_values() {
    assert_eq!(
      serde_json::from_str::<Theme>(r#""dark""#).unwrap(),
      Theme::Dark
    );
    assert!(serde_json::from_str::<EditorMode>(r#""zen""#).is_err());
  }

  #[test]
  fn test_mode_panes() {
    assert!(EditorMode::Split.shows_editor() && EditorMode::Split.shows_preview());
    assert!(!EditorMode::View.shows_editor());
    assert!(!EditorMode::Edit.shows_preview());
  }
}
