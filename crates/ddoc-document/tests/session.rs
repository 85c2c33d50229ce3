#![allow(clippy::unwrap_used, reason = "Fine in tests")]

use std::fs;

use ddoc_document::{
  DocumentDefaults,
  DocumentSession,
  FileStore,
  KeyValueStore,
  Theme,
  ToolbarAction,
  store::keys,
};
use tempfile::TempDir;

fn open(dir: &TempDir) -> DocumentSession<FileStore> {
  let store = FileStore::open(dir.path().join(".ddoc").join("store.json")).unwrap();
  DocumentSession::open(store, &DocumentDefaults::default()).unwrap()
}

#[test]
fn test_saved_document_survives_reopen() {
  let dir = TempDir::new().unwrap();

  let mut session = open(&dir);
  session.update_content("# Payments\n\nDraft.\n");
  session.update_title("Payments RFC");
  let saved_at = session.save().unwrap();
  drop(session);

  let session = open(&dir);
  assert_eq!(session.content(), "# Payments\n\nDraft.\n");
  assert_eq!(session.title(), "Payments RFC");
  assert_eq!(session.last_saved(), Some(saved_at));
  assert!(!session.is_dirty());
}

#[test]
fn test_export_then_import_keeps_text() {
  let dir = TempDir::new().unwrap();
  let export_dir = dir.path().join("out");
  let text = "# Über\r\n\n:::tip\nKeep  spacing\n:::\n";

  let mut session = open(&dir);
  session.update_content(text);
  session.update_title("Design  Notes");
  let path = session.export_markdown(&export_dir).unwrap();

  assert_eq!(path, export_dir.join("design-notes.md"));
  assert_eq!(fs::read_to_string(&path).unwrap(), text);

  let mut other = open(&dir);
  assert!(other.import_markdown(&path).unwrap());
  assert_eq!(other.content(), text);
  assert_eq!(other.title(), "design-notes");
  assert!(other.is_dirty());
}

#[test]
fn test_import_ignores_empty_file() {
  let dir = TempDir::new().unwrap();
  let empty = dir.path().join("empty.md");
  fs::write(&empty, "").unwrap();

  let mut session = open(&dir);
  assert!(!session.import_markdown(&empty).unwrap());
  assert_eq!(session.title(), "Untitled Document");
  assert!(!session.is_dirty());
}

#[test]
fn test_import_missing_file_is_an_error() {
  let dir = TempDir::new().unwrap();
  let mut session = open(&dir);
  assert!(session.import_markdown(&dir.path().join("nope.md")).is_err());
}

#[test]
fn test_theme_toggle_is_persisted() {
  let dir = TempDir::new().unwrap();

  let mut session = open(&dir);
  session.toggle_theme().unwrap();
  let store = session.into_store();
  assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("dark"));

  let session = open(&dir);
  assert_eq!(session.theme(), Theme::Dark);
}

#[test]
fn test_toolbar_edit_then_save() {
  let dir = TempDir::new().unwrap();

  let mut session = open(&dir);
  session.update_content("");
  let cursor = session.apply_toolbar_action(ToolbarAction::Link, 0);
  assert_eq!(cursor, 1);
  session.save().unwrap();

  let session = open(&dir);
  assert_eq!(session.content(), "[]()");
  assert_eq!(session.stats().characters, 4);
}
