//! Document statistics for status displays.
//!
//! Word counting is a heuristic over the raw text rather than a walk over a
//! parsed document. Markup is stripped in a fixed order (fenced code blocks,
//! then inline code spans, then markup punctuation) and whatever remains is
//! split on the whitespace set of ECMAScript's `\s`. Displayed counts depend on that order, so it must not
//! change.
use std::sync::LazyLock;

use regex::Regex;

use super::never_matching_regex;
use crate::types::DocumentStats;

static FENCED_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?s)```.*?```").unwrap_or_else(|e| {
    log::error!("Failed to compile FENCED_CODE_RE regex: {e}");
    never_matching_regex()
  })
});

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"`[^`]+`").unwrap_or_else(|e| {
    log::error!("Failed to compile INLINE_CODE_RE regex: {e}");
    never_matching_regex()
  })
});

/// Characters removed as markup punctuation before counting words.
const MARKUP_CHARS: [char; 8] = ['#', '*', '_', '~', '[', ']', '(', ')'];

/// Count the words of a Markdown document.
///
/// Unbalanced fences or backticks never cause an error; they only shift what
/// gets stripped.
#[must_use]
pub fn count_words(content: &str) -> usize {
  let without_blocks = FENCED_CODE_RE.replace_all(content, "");
  let without_inline = INLINE_CODE_RE.replace_all(&without_blocks, "");
  let without_markup = without_inline.replace(&MARKUP_CHARS[..], "");

  without_markup
    .split(is_word_separator)
    .filter(|word| !word.is_empty())
    .count()
}

/// ECMAScript `\s`: Unicode `White_Space` minus U+0085, plus U+FEFF.
const fn is_word_separator(c: char) -> bool {
  matches!(
    c,
    '\t'
      | '\n'
      | '\u{0B}'
      | '\u{0C}'
      | '\r'
      | ' '
      | '\u{A0}'
      | '\u{1680}'
      | '\u{2000}'..='\u{200A}'
      | '\u{2028}'
      | '\u{2029}'
      | '\u{202F}'
      | '\u{205F}'
      | '\u{3000}'
      | '\u{FEFF}'
  )
}

/// Length of the raw text in characters. No normalisation is applied.
#[must_use]
pub fn count_characters(content: &str) -> usize {
  content.chars().count()
}

/// Number of `\n`-delimited segments.
///
/// An empty document has one line, and a trailing newline opens one more
/// (empty) line.
#[must_use]
pub fn count_lines(content: &str) -> usize {
  content.split('\n').count()
}

/// Compute all statistics for a document in one call.
#[must_use]
pub fn document_stats(content: &str) -> DocumentStats {
  DocumentStats {
    words:      count_words(content),
    characters: count_characters(content),
    lines:      count_lines(content),
  }
}
