use std::{borrow::Cow, fmt::Write, sync::LazyLock};
pub mod stats;

use regex::Regex;

use crate::types::{Heading, Insertion};

/// Slugify heading text for use as an anchor ID.
///
/// Lowercases the text, drops every character that is not an ASCII word
/// character, whitespace or `-`, then replaces each run of whitespace with a
/// single `-`. Leading and trailing dashes are kept, and equal input always
/// yields equal slugs, so repeated headings share an ID.
#[must_use]
pub fn slugify(text: &str) -> String {
  let mut slug = String::with_capacity(text.len());
  let mut in_whitespace = false;

  for c in text.to_lowercase().chars() {
    if c.is_whitespace() {
      if !in_whitespace {
        slug.push('-');
      }
      in_whitespace = true;
      continue;
    }

    // Dropped characters must not split a whitespace run
    if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
      slug.push(c);
      in_whitespace = false;
    }
  }

  slug
}

/// Extract every ATX-style heading from markdown content, in document order.
///
/// A line counts as a heading when it starts with one to six `#` markers,
/// followed by whitespace and at least one more character on the same line.
/// Text is trimmed, so `#` followed only by spaces yields a heading with
/// empty text and id. Lines with seven or more markers are ignored. This is a line-oriented scan: `#` lines inside fenced
/// code blocks are reported too.
#[must_use]
pub fn extract_headings(content: &str) -> Vec<Heading> {
  static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^(#{1,6})[^\S\r\n]+(.+)$").unwrap_or_else(|e| {
      log::error!("Failed to compile HEADING_RE regex: {e}");
      never_matching_regex()
    })
  });

  HEADING_RE
    .captures_iter(content)
    .map(|caps| {
      let text = caps[2].trim();
      let level = u8::try_from(caps[1].len()).unwrap_or(6);
      Heading {
        level,
        text: text.to_string(),
        id: slugify(text),
      }
    })
    .collect()
}

/// Extract the first H1 heading from markdown content as the document title.
///
/// # Returns
///
/// `None` if no H1 heading is found.
#[must_use]
pub fn extract_title(content: &str) -> Option<String> {
  extract_headings(content)
    .into_iter()
    .find(|heading| heading.level == 1)
    .map(|heading| heading.text)
}

/// Render headings as a flat HTML list of links to their anchors.
///
/// Each item carries a `toc-level-N` class for indentation. Returns an empty
/// string when there are no headings.
#[must_use]
pub fn toc_html(headings: &[Heading]) -> String {
  if headings.is_empty() {
    return String::new();
  }

  let mut toc = String::from("<ul class=\"toc\">\n");
  for heading in headings {
    // Writing to String is infallible
    let _ = writeln!(
      toc,
      "<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>",
      heading.level,
      heading.id,
      html_escape::encode_text(&heading.text)
    );
  }
  toc.push_str("</ul>");
  toc
}

/// Splice `text` into `content` at the character offset `cursor`.
///
/// The returned cursor is always `cursor` plus the character length of
/// `text`. Offsets are expected to lie within `0..=content.chars().count()`;
/// callers should clamp before calling. An offset past the end splices at the
/// end of the document instead of panicking.
#[must_use]
pub fn insert_at_cursor(content: &str, cursor: usize, text: &str) -> Insertion {
  let split = content
    .char_indices()
    .nth(cursor)
    .map_or(content.len(), |(idx, _)| idx);
  let (before, after) = content.split_at(split);

  let mut spliced = String::with_capacity(content.len() + text.len());
  spliced.push_str(before);
  spliced.push_str(text);
  spliced.push_str(after);

  Insertion {
    content: spliced,
    cursor:  cursor.saturating_add(text.chars().count()),
  }
}

/// Apply a regex transformation to HTML elements using the provided function.
/// Used by the preview renderer for post-processing.
pub fn process_html_elements<F>(html: &str, regex: &Regex, transform: F) -> String
where
  F: Fn(&regex::Captures) -> String,
{
  match regex.replace_all(html, transform) {
    Cow::Borrowed(_) => html.to_string(),
    Cow::Owned(s) => s,
  }
}

/// Create a regex that never matches anything.
///
/// This is used as a fallback pattern when a regex fails to compile.
#[must_use]
#[allow(
  clippy::expect_used,
  reason = "Both patterns are constant and known to compile"
)]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| {
    Regex::new(r"^\b$").expect("fallback regex must compile")
  })
}
