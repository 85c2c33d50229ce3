//! Callout blocks and collaborator hand-off markup.
use std::{borrow::Cow, fmt, sync::LazyLock};

use regex::Regex;

use crate::utils::{never_matching_regex, process_html_elements, slugify};

/// A callout block type.
///
/// The rewrite stage accepts any identifier. Known types get their own
/// styling and everything else falls back to a neutral style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalloutKind {
  Info,
  Warning,
  Error,
  Tip,
  Other(String),
}

impl CalloutKind {
  /// Parse a callout identifier. Never fails.
  #[must_use]
  pub fn parse(identifier: &str) -> Self {
    match identifier {
      "info" => Self::Info,
      "warning" => Self::Warning,
      "error" => Self::Error,
      "tip" => Self::Tip,
      other => Self::Other(other.to_string()),
    }
  }

  /// CSS modifier class used when styling the callout container.
  #[must_use]
  pub const fn css_class(&self) -> &'static str {
    match self {
      Self::Info => "callout-info",
      Self::Warning => "callout-warning",
      Self::Error => "callout-error",
      Self::Tip => "callout-tip",
      Self::Other(_) => "callout-neutral",
    }
  }

  /// Whether this is one of the styled callout types.
  #[must_use]
  pub const fn is_known(&self) -> bool {
    !matches!(self, Self::Other(_))
  }
}

impl fmt::Display for CalloutKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Info => f.write_str("info"),
      Self::Warning => f.write_str("warning"),
      Self::Error => f.write_str("error"),
      Self::Tip => f.write_str("tip"),
      Self::Other(name) => f.write_str(name),
    }
  }
}

/// Rewrite `:::type` callout blocks into raw container markup.
///
/// A block opens with a line `:::<type>` (one or more word characters) and
/// closes at the next line that is exactly `:::`. Each block becomes
///
/// ```html
/// <div data-callout="type">body</div>
/// ```
///
/// with the body passed through untouched. Blocks are matched left to right
/// without overlap, so a nested opener ends up inside the outer body. Input
/// without callouts is returned as-is.
#[must_use]
pub fn rewrite_callouts(content: &str) -> Cow<'_, str> {
  static CALLOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^:::([A-Za-z0-9_]+)\r?\n((?s:.*?))\r?\n:::$")
      .unwrap_or_else(|e| {
        log::error!("Failed to compile CALLOUT_RE regex: {e}");
        never_matching_regex()
      })
  });

  CALLOUT_RE.replace_all(content, |caps: &regex::Captures| {
    let kind = &caps[1];
    let body = &caps[2];
    format!("<div data-callout=\"{kind}\">{body}</div>")
  })
}

/// Decorate rendered callout containers with styling classes.
///
/// Expects HTML produced from [`rewrite_callouts`] output. Unknown types get
/// the neutral `callout-neutral` class.
#[must_use]
pub fn style_callouts(html: &str) -> String {
  static CALLOUT_DIV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div data-callout="([A-Za-z0-9_]+)">"#).unwrap_or_else(|e| {
      log::error!("Failed to compile CALLOUT_DIV_RE regex: {e}");
      never_matching_regex()
    })
  });

  process_html_elements(html, &CALLOUT_DIV_RE, |caps| {
    let identifier = &caps[1];
    let kind = CalloutKind::parse(identifier);
    if !kind.is_known() {
      log::debug!("Unknown callout type '{identifier}', using neutral style");
    }
    format!(
      "<div class=\"callout {}\" data-callout=\"{identifier}\">",
      kind.css_class()
    )
  })
}

/// Give rendered headings an `id` matching [`slugify`] of their text, so the
/// table of contents from [`crate::utils::extract_headings`] can link to them.
///
/// Inline markup is stripped and entities decoded before slugging. Headings
/// whose slug would be empty are left without an id.
#[must_use]
pub fn anchor_headings(html: &str) -> String {
  static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h([1-6])>(.*?)</h[1-6]>").unwrap_or_else(|e| {
      log::error!("Failed to compile HEADING_RE regex: {e}");
      never_matching_regex()
    })
  });
  static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").unwrap_or_else(|e| {
      log::error!("Failed to compile TAG_RE regex: {e}");
      never_matching_regex()
    })
  });

  process_html_elements(html, &HEADING_RE, |caps| {
    let level = &caps[1];
    let inner = &caps[2];
    let text = TAG_RE.replace_all(inner, "");
    let id = slugify(&html_escape::decode_html_entities(&text));

    if id.is_empty() {
      caps[0].to_string()
    } else {
      format!("<h{level} id=\"{id}\">{inner}</h{level}>")
    }
  })
}

/// Route rendered fenced code blocks to their client-side collaborators.
///
/// Blocks tagged `mermaid` become `<pre class="mermaid">` for the diagram
/// renderer when `mermaid` is set. Other tagged blocks are wrapped for the
/// syntax highlighter when `highlight` is set. Untagged blocks are left alone.
#[must_use]
pub fn route_code_blocks(html: &str, mermaid: bool, highlight: bool) -> String {
  static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<pre><code class="language-([^"\s]+)">(.*?)</code></pre>"#)
      .unwrap_or_else(|e| {
        log::error!("Failed to compile CODE_BLOCK_RE regex: {e}");
        never_matching_regex()
      })
  });

  if !mermaid && !highlight {
    return html.to_string();
  }

  process_html_elements(html, &CODE_BLOCK_RE, |caps| {
    let language = &caps[1];
    let code = &caps[2];

    if language == "mermaid" {
      if mermaid {
        let chart = code.strip_suffix('\n').unwrap_or(code);
        return format!("<pre class=\"mermaid\">{chart}</pre>");
      }
    } else if highlight {
      return format!(
        "<pre class=\"highlight\" data-language=\"{language}\"><code \
         class=\"language-{language}\">{code}</code></pre>"
      );
    }

    caps[0].to_string()
  })
}
