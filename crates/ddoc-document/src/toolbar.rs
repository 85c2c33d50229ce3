//! Editor toolbar actions.
use std::{fmt, str::FromStr};

use ddoc_markdown::{Insertion, utils::insert_at_cursor};

use crate::error::DocumentError;

/// A markdown snippet inserted at the cursor by a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
  Heading1,
  Heading2,
  Bold,
  Italic,
  BulletList,
  NumberedList,
  Quote,
  CodeBlock,
  Link,
  Image,
}

impl ToolbarAction {
  /// Every action, in toolbar order.
  pub const ALL: [Self; 10] = [
    Self::Heading1,
    Self::Heading2,
    Self::Bold,
    Self::Italic,
    Self::BulletList,
    Self::NumberedList,
    Self::Quote,
    Self::CodeBlock,
    Self::Link,
    Self::Image,
  ];

  /// Short name used on the command line.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Heading1 => "heading1",
      Self::Heading2 => "heading2",
      Self::Bold => "bold",
      Self::Italic => "italic",
      Self::BulletList => "bullet-list",
      Self::NumberedList => "numbered-list",
      Self::Quote => "quote",
      Self::CodeBlock => "code-block",
      Self::Link => "link",
      Self::Image => "image",
    }
  }

  /// Human readable button label.
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Heading1 => "Heading 1",
      Self::Heading2 => "Heading 2",
      Self::Bold => "Bold",
      Self::Italic => "Italic",
      Self::BulletList => "Bullet List",
      Self::NumberedList => "Numbered List",
      Self::Quote => "Quote",
      Self::CodeBlock => "Code Block",
      Self::Link => "Link",
      Self::Image => "Image",
    }
  }

  /// Markdown inserted by the action.
  #[must_use]
  pub const fn snippet(self) -> &'static str {
    match self {
      Self::Heading1 => "# ",
      Self::Heading2 => "## ",
      Self::Bold => "****",
      Self::Italic => "**",
      Self::BulletList => "- ",
      Self::NumberedList => "1. ",
      Self::Quote => "> ",
      Self::CodeBlock => "```\n\n```",
      Self::Link => "[]()",
      Self::Image => "![]()",
    }
  }

  /// How many characters the cursor moves back from the end of the snippet,
  /// so it lands where the user types next.
  #[must_use]
  pub const fn cursor_back(self) -> usize {
    match self {
      Self::Bold => 2,
      Self::Italic => 1,
      Self::CodeBlock => 4,
      Self::Link | Self::Image => 3,
      _ => 0,
    }
  }

  /// Insert the snippet into `content` at `cursor` and place the cursor
  /// inside it.
  ///
  /// `cursor` is clamped to the document length first.
  #[must_use]
  pub fn apply(self, content: &str, cursor: usize) -> Insertion {
    let cursor = cursor.min(content.chars().count());
    let mut insertion = insert_at_cursor(content, cursor, self.snippet());
    insertion.cursor = insertion.cursor.saturating_sub(self.cursor_back());
    insertion
  }
}

impl fmt::Display for ToolbarAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for ToolbarAction {
  type Err = DocumentError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s
      .trim()
      .to_lowercase()
      .replace(|c: char| c == '_' || c == ' ', "-");
    Self::ALL
      .into_iter()
      .find(|action| action.name() == wanted)
      .ok_or_else(|| DocumentError::UnknownAction(s.to_string()))
  }
}
