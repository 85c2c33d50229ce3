//! The document being edited and its persistence.
use std::path::{Path, PathBuf};

use ddoc_config::{EditorMode, Theme};
use ddoc_markdown::{
  DocumentStats,
  Heading,
  utils::{extract_headings, insert_at_cursor, stats::document_stats},
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
  error::DocumentResult,
  store::{KeyValueStore, keys},
  toolbar::ToolbarAction,
  transfer,
};

/// Starter document shown when nothing has been stored yet.
pub const DEFAULT_CONTENT: &str = r#"# Design Document

## Overview

Write your project design documentation here.

## Architecture

```mermaid
flowchart TD
    A[Client] --> B[API Gateway]
    B --> C[Service 1]
    B --> D[Service 2]
```

## Code Example

```typescript
function greet(name: string): string {
  return `Hello, ${name}!`;
}
```

## Notes

:::info
This is an informational callout.
:::
"#;

/// Values used for anything the store does not hold yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDefaults {
  pub title:       String,
  pub content:     String,
  pub theme:       Theme,
  pub editor_mode: EditorMode,
}

impl Default for DocumentDefaults {
  fn default() -> Self {
    Self {
      title:       "Untitled Document".to_string(),
      content:     DEFAULT_CONTENT.to_string(),
      theme:       Theme::default(),
      editor_mode: EditorMode::default(),
    }
  }
}

/// Snapshot of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentState {
  pub content:    String,
  pub title:      String,
  pub last_saved: Option<Timestamp>,
  pub is_dirty:   bool,
}

/// An editing session over a document persisted in `S`.
///
/// Edits change the in-memory state and mark it dirty; nothing is written
/// to the store until [`DocumentSession::save`]. Preferences are written
/// through immediately.
#[derive(Debug)]
pub struct DocumentSession<S: KeyValueStore> {
  store:       S,
  state:       DocumentState,
  theme:       Theme,
  editor_mode: EditorMode,
}

impl<S: KeyValueStore> DocumentSession<S> {
  /// Load the document and preferences from `store`, falling back to
  /// `defaults` for anything missing.
  ///
  /// A stored preference or timestamp that cannot be parsed is logged and
  /// replaced by its default.
  ///
  /// # Errors
  ///
  /// Returns an error if the store cannot be read.
  pub fn open(store: S, defaults: &DocumentDefaults) -> DocumentResult<Self> {
    let content = store
      .get(keys::CONTENT)?
      .unwrap_or_else(|| defaults.content.clone());
    let title = store
      .get(keys::TITLE)?
      .unwrap_or_else(|| defaults.title.clone());

    let last_saved = store.get(keys::LAST_SAVED)?.and_then(|raw| {
      raw
        .parse::<Timestamp>()
        .map_err(|e| {
          log::warn!("Ignoring invalid last-saved timestamp '{raw}': {e}");
        })
        .ok()
    });

    let theme = stored_or(&store, keys::THEME, defaults.theme)?;
    let editor_mode = stored_or(&store, keys::EDITOR_MODE, defaults.editor_mode)?;

    log::debug!(
      "Opened document '{title}' ({} chars, last saved {last_saved:?})",
      content.chars().count()
    );

    Ok(Self {
      store,
      state: DocumentState {
        content,
        title,
        last_saved,
        is_dirty: false,
      },
      theme,
      editor_mode,
    })
  }

  #[must_use]
  pub const fn state(&self) -> &DocumentState {
    &self.state
  }

  #[must_use]
  pub fn content(&self) -> &str {
    &self.state.content
  }

  #[must_use]
  pub fn title(&self) -> &str {
    &self.state.title
  }

  #[must_use]
  pub const fn is_dirty(&self) -> bool {
    self.state.is_dirty
  }

  #[must_use]
  pub const fn last_saved(&self) -> Option<Timestamp> {
    self.state.last_saved
  }

  /// Replace the document text.
  pub fn update_content(&mut self, content: impl Into<String>) {
    self.state.content = content.into();
    self.state.is_dirty = true;
  }

  /// Replace the document title.
  pub fn update_title(&mut self, title: impl Into<String>) {
    self.state.title = title.into();
    self.state.is_dirty = true;
  }

  /// Insert `text` at character offset `cursor` and return the new cursor.
  ///
  /// Offsets past the end insert at the end.
  pub fn insert(&mut self, cursor: usize, text: &str) -> usize {
    let cursor = cursor.min(self.state.content.chars().count());
    let insertion = insert_at_cursor(&self.state.content, cursor, text);
    self.update_content(insertion.content);
    insertion.cursor
  }

  /// Apply a toolbar action at `cursor` and return the new cursor.
  pub fn apply_toolbar_action(&mut self, action: ToolbarAction, cursor: usize) -> usize {
    let insertion = action.apply(&self.state.content, cursor);
    self.update_content(insertion.content);
    insertion.cursor
  }

  #[must_use]
  pub fn stats(&self) -> DocumentStats {
    document_stats(&self.state.content)
  }

  #[must_use]
  pub fn headings(&self) -> Vec<Heading> {
    extract_headings(&self.state.content)
  }

  /// Persist content and title, record the save time and clear the dirty
  /// flag.
  ///
  /// # Errors
  ///
  /// Returns an error if the store cannot be written.
  pub fn save(&mut self) -> DocumentResult<Timestamp> {
    let now = Timestamp::now();

    self.store.set(keys::CONTENT, &self.state.content)?;
    self.store.set(keys::TITLE, &self.state.title)?;
    self.store.set(keys::LAST_SAVED, &now.to_string())?;

    self.state.last_saved = Some(now);
    self.state.is_dirty = false;
    log::info!("Saved document '{}'", self.state.title);
    Ok(now)
  }

  /// Write the document text to `dir` as a markdown file named after the
  /// title.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be written.
  pub fn export_markdown(&self, dir: &Path) -> DocumentResult<PathBuf> {
    transfer::export_markdown(&self.state.content, &self.state.title, dir)
  }

  /// Replace the document with the contents of `path`.
  ///
  /// An empty file leaves the document untouched and returns `false`.
  /// Otherwise the title becomes the file name without its `.md` suffix.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read.
  pub fn import_markdown(&mut self, path: &Path) -> DocumentResult<bool> {
    let text = transfer::read_markdown(path)?;
    if text.is_empty() {
      log::warn!("Not importing empty file {}", path.display());
      return Ok(false);
    }

    self.update_content(text);
    if let Some(title) = transfer::title_from_path(path) {
      self.update_title(title);
    }
    log::info!("Imported {}", path.display());
    Ok(true)
  }

  #[must_use]
  pub const fn editor_mode(&self) -> EditorMode {
    self.editor_mode
  }

  /// Change and persist the editor mode.
  ///
  /// # Errors
  ///
  /// Returns an error if the store cannot be written.
  pub fn set_editor_mode(&mut self, mode: EditorMode) -> DocumentResult<()> {
    self.store.set(keys::EDITOR_MODE, mode.as_str())?;
    self.editor_mode = mode;
    Ok(())
  }

  #[must_use]
  pub const fn theme(&self) -> Theme {
    self.theme
  }

  /// Change and persist the theme.
  ///
  /// # Errors
  ///
  /// Returns an error if the store cannot be written.
  pub fn set_theme(&mut self, theme: Theme) -> DocumentResult<()> {
    self.store.set(keys::THEME, theme.as_str())?;
    self.theme = theme;
    Ok(())
  }

  /// Switch between light and dark and return the new theme.
  ///
  /// # Errors
  ///
  /// Returns an error if the store cannot be written.
  pub fn toggle_theme(&mut self) -> DocumentResult<Theme> {
    let theme = self.theme.toggled();
    self.set_theme(theme)?;
    Ok(theme)
  }

  #[must_use]
  pub const fn store(&self) -> &S {
    &self.store
  }

  /// Give back the underlying store.
  #[must_use]
  pub fn into_store(self) -> S {
    self.store
  }
}

fn stored_or<S, T>(store: &S, key: &str, default: T) -> DocumentResult<T>
where
  S: KeyValueStore,
  T: Copy + std::str::FromStr,
  T::Err: std::fmt::Display,
{
  Ok(store.get(key)?.map_or(default, |raw| {
    raw.parse().unwrap_or_else(|e| {
      log::warn!("Ignoring stored {key}: {e}");
      default
    })
  }))
}
