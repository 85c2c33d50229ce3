//! Markdown import and export.
//!
//! The file format is the document text itself, UTF-8, with no header or
//! other structure. Exporting then importing yields the same text.
use std::{
  fs,
  path::{Path, PathBuf},
};

use crate::error::DocumentResult;

/// Name of the file a document with `title` is exported to.
///
/// Whitespace runs become `-`, including leading and trailing ones, the
/// result is lowercased and path separators are replaced so the file always
/// lands in the export directory. A title that is empty or only whitespace
/// and dots falls back to `untitled`.
#[must_use]
pub fn export_file_name(title: &str) -> String {
  let mut stem = String::with_capacity(title.len());
  let mut in_whitespace = false;

  for c in title.to_lowercase().chars() {
    if c.is_whitespace() {
      if !in_whitespace {
        stem.push('-');
      }
      in_whitespace = true;
      continue;
    }

    in_whitespace = false;
    stem.push(if matches!(c, '/' | '\\') { '-' } else { c });
  }

  if title.trim().chars().all(|c| c == '.') {
    stem = "untitled".to_string();
  }

  format!("{stem}.md")
}

/// Title for a document imported from `path`: the file name with a trailing
/// `.md` removed.
#[must_use]
pub fn title_from_path(path: &Path) -> Option<String> {
  let name = path.file_name()?.to_string_lossy();
  let title = name.strip_suffix(".md").unwrap_or(&name);
  (!title.is_empty()).then(|| title.to_string())
}

/// Write `content` to `<dir>/<export_file_name(title)>`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn export_markdown(
  content: &str,
  title: &str,
  dir: &Path,
) -> DocumentResult<PathBuf> {
  if !dir.as_os_str().is_empty() && !dir.exists() {
    fs::create_dir_all(dir)?;
  }

  let path = dir.join(export_file_name(title));
  fs::write(&path, content)?;
  log::info!("Exported document to {}", path.display());
  Ok(path)
}

/// Read the text of a markdown file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_markdown(path: &Path) -> DocumentResult<String> {
  Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_export_file_name() {
    assert_eq!(export_file_name("Untitled Document"), "untitled-document.md");
    assert_eq!(export_file_name("API  v2:  Plan"), "api-v2:-plan.md");
    assert_eq!(export_file_name("../etc/passwd"), "..-etc-passwd.md");
    assert_eq!(export_file_name("   "), "untitled.md");
    assert_eq!(export_file_name(""), "untitled.md");
    assert_eq!(export_file_name(".."), "untitled.md");
  }

  #[test]
  fn test_export_file_name_keeps_edge_whitespace() {
    assert_eq!(export_file_name("Design Doc "), "design-doc-.md");
    assert_eq!(export_file_name("\t Plan"), "-plan.md");
  }

  #[test]
  fn test_title_from_path() {
    assert_eq!(
      title_from_path(Path::new("docs/payments-rfc.md")).as_deref(),
      Some("payments-rfc")
    );
    assert_eq!(
      title_from_path(Path::new("notes.markdown")).as_deref(),
      Some("notes.markdown")
    );
    assert_eq!(title_from_path(Path::new(".md")), None);
  }
}
