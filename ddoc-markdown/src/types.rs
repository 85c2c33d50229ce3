//! Types for the ddoc-markdown public API.
use serde::{Deserialize, Serialize};

/// A heading discovered in a Markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
  /// Heading level (1-6), the number of leading `#` markers.
  pub level: u8,
  /// Heading text with surrounding whitespace removed.
  pub text:  String,
  /// Slug derived from `text`. Not unique across headings with equal text.
  pub id:    String,
}

/// Word, character and line counts of a document.
#[derive(
  Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq,
)]
pub struct DocumentStats {
  /// Words left after stripping code and markup punctuation.
  pub words:      usize,
  /// Length of the raw text in characters.
  pub characters: usize,
  /// Number of newline-delimited segments.
  pub lines:      usize,
}

/// Result of splicing text into a document at a cursor offset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insertion {
  /// The document text after the insertion.
  pub content: String,
  /// Cursor offset (in characters) directly after the inserted text.
  pub cursor:  usize,
}

/// Result of rendering a document for preview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkdownResult {
  /// Rendered HTML output.
  pub html: String,

  /// Extracted headings (for `ToC`, navigation, etc).
  pub headings: Vec<Heading>,

  /// Title of the document, if found (first H1).
  pub title: Option<String>,

  /// Statistics of the source text.
  pub stats: DocumentStats,
}
