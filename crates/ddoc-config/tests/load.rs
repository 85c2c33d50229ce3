#![allow(clippy::unwrap_used, reason = "Fine in tests")]

use std::{fs, path::PathBuf};

use ddoc_config::{Config, ConfigError, EditorMode, Theme};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
  let path = dir.path().join(name);
  fs::write(&path, content).unwrap();
  path
}

#[test]
fn test_from_toml_file() {
  let dir = TempDir::new().unwrap();
  let path = write(
    &dir,
    "ddoc.toml",
    "default_title = \"RFC 12\"\ntheme = \"dark\"\n\n[render]\nmermaid = \
     false\n",
  );

  let config = Config::from_file(&path).unwrap();

  assert_eq!(config.default_title, "RFC 12");
  assert_eq!(config.theme, Theme::Dark);
  assert!(!config.render.mermaid);
  // Unset keys keep their defaults
  assert!(config.render.callouts);
  assert_eq!(config.editor_mode, EditorMode::Split);
}

#[test]
fn test_from_json_file() {
  let dir = TempDir::new().unwrap();
  let path = write(
    &dir,
    "ddoc.json",
    r#"{ "editor_mode": "view", "render": { "standalone": true } }"#,
  );

  let config = Config::from_file(&path).unwrap();

  assert_eq!(config.editor_mode, EditorMode::View);
  assert!(config.render.standalone);
}

#[test]
fn test_unsupported_extension() {
  let dir = TempDir::new().unwrap();
  let path = write(&dir, "ddoc.yaml", "theme: dark\n");

  let err = Config::from_file(&path).unwrap_err();

  assert!(matches!(err, ConfigError::Config(_)));
  assert!(err.to_string().contains("Unsupported config file format"));
}

#[test]
fn test_malformed_toml() {
  let dir = TempDir::new().unwrap();
  let path = write(&dir, "broken.toml", "theme = \n");

  let err = Config::from_file(&path).unwrap_err();

  assert!(matches!(&err, ConfigError::Toml { path: p, .. } if *p == path));
  assert!(err.to_string().contains("Failed to parse TOML config"));
}

#[test]
fn test_malformed_json() {
  let dir = TempDir::new().unwrap();
  let path = write(&dir, "broken.json", "{ \"theme\": ");

  let err = Config::from_file(&path).unwrap_err();

  assert!(matches!(err, ConfigError::Serde { .. }));
  assert!(err.to_string().contains("Failed to parse JSON config"));
}

#[test]
fn test_missing_file() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("absent.toml");

  let err = Config::from_file(&path).unwrap_err();

  assert!(matches!(&err, ConfigError::Io { path: p, .. } if *p == path));
  assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_unknown_theme_fails_to_parse() {
  let dir = TempDir::new().unwrap();
  let path = write(&dir, "ddoc.json", r#"{ "theme": "sepia" }"#);

  let err = Config::from_file(&path).unwrap_err();

  assert!(matches!(err, ConfigError::Serde { .. }));
}

#[test]
fn test_load_merges_files_then_overrides() {
  let dir = TempDir::new().unwrap();
  let first = write(
    &dir,
    "base.toml",
    "default_content = \"# Base\"\nexport_dir = \"out\"\n",
  );
  let second = write(&dir, "team.json", r#"{ "export_dir": "docs" }"#);

  let config = Config::load(&[first, second], &[
    "default_title=Team Doc".to_string(),
  ])
  .unwrap();

  assert_eq!(config.export_dir, PathBuf::from("docs"));
  assert_eq!(config.default_content.as_deref(), Some("# Base"));
  assert_eq!(config.default_title, "Team Doc");
}

#[test]
fn test_load_rejects_unknown_theme() {
  let dir = TempDir::new().unwrap();
  let path = write(&dir, "ddoc.toml", "theme = \"neon\"\n");

  let err = Config::load(&[path], &[]).unwrap_err();

  assert!(matches!(err, ConfigError::Toml { .. }));
  assert!(err.to_string().contains("neon"));
}

#[test]
fn test_load_validates_result() {
  let dir = TempDir::new().unwrap();
  let path = write(&dir, "ddoc.toml", "default_title = \"\"\n");

  let err = Config::load(&[path], &[]).unwrap_err();

  assert!(err.to_string().contains("Default title must not be empty"));
}

#[test]
fn test_find_config_file_in_directory() {
  let dir = TempDir::new().unwrap();
  assert_eq!(Config::find_config_file_in(dir.path()), None);

  fs::create_dir_all(dir.path().join(".config")).unwrap();
  let nested = write(&dir, ".config/ddoc.toml", "");
  assert_eq!(Config::find_config_file_in(dir.path()), Some(nested));

  let top = write(&dir, "ddoc.toml", "");
  assert_eq!(Config::find_config_file_in(dir.path()), Some(top));
}

#[test]
fn test_generated_config_loads() {
  let dir = TempDir::new().unwrap();

  for format in ["toml", "json"] {
    let path = dir.path().join(format!("generated.{format}"));
    Config::generate_default_config(format, &path).unwrap();
    assert_eq!(Config::from_file(&path).unwrap(), Config::default());
  }
}
