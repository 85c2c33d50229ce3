use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
  error::ConfigError,
  prefs::{EditorMode, Theme},
  render::RenderConfig,
};

/// File names searched, in order, when no config file is given explicitly.
const CONFIG_FILENAMES: [&str; 6] = [
  "ddoc.toml",
  "ddoc.json",
  ".ddoc.toml",
  ".ddoc.json",
  ".config/ddoc.toml",
  ".config/ddoc.json",
];

/// Configuration for ddoc.
///
/// [`Config`] controls where the document and its preferences are stored,
/// what a brand new document looks like and how previews are rendered. Fields
/// are typically loaded from a TOML or JSON config file and adjusted with
/// `--config KEY=VALUE` overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Path of the key/value store holding the document and preferences.
  pub store_path: PathBuf,

  /// Directory that exported markdown files are written to.
  pub export_dir: PathBuf,

  /// Title given to a document when the store has none.
  pub default_title: String,

  /// Content given to a document when the store has none. [`None`] selects
  /// the built-in starter document.
  pub default_content: Option<String>,

  /// Initial theme preference.
  pub theme: Theme,

  /// Initial editor mode.
  pub editor_mode: EditorMode,

  /// Preview rendering options.
  pub render: RenderConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      store_path:      PathBuf::from(".ddoc/store.json"),
      export_dir:      PathBuf::from("."),
      default_title:   "Untitled Document".to_string(),
      default_content: None,
      theme:           Theme::default(),
      editor_mode:     EditorMode::default(),
      render:          RenderConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content =
      fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
      })?;

    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase);

    match extension.as_deref() {
      Some("json") => {
        serde_json::from_str(&content).map_err(|source| ConfigError::Serde {
          path: path.to_path_buf(),
          source,
        })
      },
      Some("toml") => {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
          path: path.to_path_buf(),
          source,
        })
      },
      Some(_) => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
      None => {
        Err(ConfigError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from files and overrides.
  ///
  /// Explicit `config_files` are loaded and merged in order. Without any, a
  /// config file is discovered in the current directory, falling back to the
  /// defaults. `config_overrides` are applied last.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded, an override is malformed, or
  /// the result fails validation.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged_config = Self::from_file(first)?;
      for config_path in rest {
        merged_config.merge(Self::from_file(config_path)?);
      }

      if !rest.is_empty() {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      merged_config
    } else if let Some(discovered_config) = Self::find_config_file() {
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config)?
    } else {
      log::debug!("No config file found, using defaults");
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    config.validate()?;
    Ok(config)
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  ///
  /// # Example
  ///
  /// ```rust, ignore
  /// config.apply_overrides(&vec![
  ///     "render.mermaid=false".to_string(),
  ///     "default_title=Architecture".to_string(),
  /// ])?;
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override to the field named by `key`.
  ///
  /// Nested render options use dotted keys such as `render.gfm`. An empty
  /// value clears `default_content`.
  ///
  /// # Errors
  ///
  /// Returns an error if the key is unknown or the value cannot be parsed.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "store_path" => self.store_path = PathBuf::from(value),
      "export_dir" => self.export_dir = PathBuf::from(value),
      "default_title" => self.default_title = value.to_string(),
      "default_content" => {
        self.default_content =
          (!value.is_empty()).then(|| value.replace("\\n", "\n"));
      },
      "theme" => self.theme = value.parse()?,
      "editor_mode" => self.editor_mode = value.parse()?,
      "render.gfm" => self.render.gfm = parse_bool(key, value)?,
      "render.callouts" => self.render.callouts = parse_bool(key, value)?,
      "render.mermaid" => self.render.mermaid = parse_bool(key, value)?,
      "render.highlight_code" => {
        self.render.highlight_code = parse_bool(key, value)?;
      },
      "render.standalone" => self.render.standalone = parse_bool(key, value)?,
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'"
        )));
      },
    }

    log::debug!("Applied config override {key}={value}");
    Ok(())
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: Other's [`Some`] value replaces this config's
  ///   value
  /// - Plain fields (String, bool, paths): Other's value always replaces
  pub fn merge(&mut self, other: Self) {
    self.store_path = other.store_path;
    self.export_dir = other.export_dir;
    self.default_title = other.default_title;
    if other.default_content.is_some() {
      self.default_content = other.default_content;
    }
    self.theme = other.theme;
    self.editor_mode = other.editor_mode;
    self.render = other.render;
  }

  /// Check constraints that deserialization alone does not enforce.
  ///
  /// # Errors
  ///
  /// Returns an error naming every invalid field.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if self.default_title.trim().is_empty() {
      errors.push("Default title must not be empty".to_string());
    }

    if !errors.is_empty() {
      let error_message = errors.join("\n");
      return Err(ConfigError::Config(format!(
        "Configuration validation errors:\n{error_message}"
      )));
    }

    Ok(())
  }

  /// Search for a config file in the current directory, then in
  /// `$XDG_CONFIG_HOME/ddoc/`.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    if let Some(found) = Self::find_config_file_in(&current_dir) {
      return Some(found);
    }

    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME")?;
    let xdg_config_dir = PathBuf::from(xdg_config_home).join("ddoc");
    ["config.toml", "config.json"]
      .iter()
      .map(|filename| xdg_config_dir.join(filename))
      .find(|path| path.is_file())
  }

  /// Search `dir` for one of the known config file names.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
      .iter()
      .map(|filename| dir.join(filename))
      .find(|path| path.is_file())
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)
      .map_err(|e| ConfigError::Template(e.to_string()))?;

    fs::write(path, config_content).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

/// Parse a boolean override value. Accepts `true/false`, `yes/no`, `on/off`
/// and `1/0`.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.to_lowercase().as_str() {
    "true" | "yes" | "on" | "1" => Ok(true),
    "false" | "no" | "off" | "0" => Ok(false),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid boolean value for '{key}': '{value}'"
      )))
    },
  }
}

#[cfg(test)]
#[allow(
  clippy::unwrap_used,
  clippy::field_reassign_with_default,
  reason = "Fine in tests"
)]
mod tests {
  use super::*;

  #[test]
  fn test_merge_plain_fields_replace() {
    let mut base = Config::default();
    base.default_title = "Base".to_string();

    let mut other = Config::default();
    other.default_title = "Other".to_string();
    other.render.mermaid = false;

    base.merge(other);

    assert_eq!(base.default_title, "Other");
    assert!(!base.render.mermaid);
  }

  #[test]
  fn test_merge_option_fields_keep_existing() {
    let mut base = Config::default();
    base.default_content = Some("# Base".to_string());

    base.merge(Config::default());

    assert_eq!(base.default_content.as_deref(), Some("# Base"));
  }

  #[test]
  fn test_apply_overrides_string_and_path() {
    let mut config = Config::default();

    config
      .apply_overrides(&[
        "default_title=Payments Redesign".to_string(),
        "store_path=/tmp/ddoc/store.json".to_string(),
      ])
      .unwrap();

    assert_eq!(config.default_title, "Payments Redesign");
    assert_eq!(config.store_path, PathBuf::from("/tmp/ddoc/store.json"));
  }

  #[test]
  fn test_apply_overrides_boolean() {
    let mut config = Config::default();

    config
      .apply_overrides(&[
        "render.mermaid=no".to_string(),
        "render.standalone=1".to_string(),
      ])
      .unwrap();

    assert!(!config.render.mermaid);
    assert!(config.render.standalone);
  }

  #[test]
  fn test_apply_override_default_content() {
    let mut config = Config::default();

    config.apply_override("default_content", "# A\\nbody").unwrap();
    assert_eq!(config.default_content.as_deref(), Some("# A\nbody"));

    config.apply_override("default_content", "").unwrap();
    assert_eq!(config.default_content, None);
  }

  #[test]
  fn test_apply_overrides_invalid_format() {
    let mut config = Config::default();

    let result = config.apply_overrides(&["no_equals_sign".to_string()]);

    assert!(
      result
        .unwrap_err()
        .to_string()
        .contains("Expected KEY=VALUE")
    );
  }

  #[test]
  fn test_apply_overrides_unknown_key() {
    let mut config = Config::default();

    let result = config.apply_overrides(&["unknown_key=value".to_string()]);

    assert!(
      result
        .unwrap_err()
        .to_string()
        .contains("Unknown configuration key")
    );
  }

  #[test]
  fn test_apply_overrides_invalid_boolean() {
    let mut config = Config::default();

    let result = config.apply_overrides(&["render.gfm=maybe".to_string()]);

    assert!(result.unwrap_err().to_string().contains("Invalid boolean"));
  }

  #[test]
  fn test_apply_overrides_parse_preferences() {
    let mut config = Config::default();

    config
      .apply_overrides(&[
        "theme=Dark".to_string(),
        "editor_mode=view".to_string(),
      ])
      .unwrap();

    assert_eq!(config.theme, Theme::Dark);
    assert_eq!(config.editor_mode, EditorMode::View);
  }

  #[test]
  fn test_apply_overrides_rejects_unknown_theme_and_mode() {
    let mut config = Config::default();

    let err = config.apply_override("theme", "sepia").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { kind: "theme", .. }));

    let err = config.apply_override("editor_mode", "zen").unwrap_err();
    assert_eq!(err.to_string(), "Invalid editor mode: 'zen'");
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_validate_rejects_blank_title() {
    let mut config = Config::default();
    config.default_title = "  ".to_string();

    let message = config.validate().unwrap_err().to_string();

    assert!(message.contains("Default title must not be empty"));
  }

  #[test]
  fn test_validate_accepts_defaults() {
    assert!(Config::default().validate().is_ok());
  }
}
