use ddoc_markdown::MarkdownOptions;
use serde::{Deserialize, Serialize};

/// Configuration for preview rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct RenderConfig {
  /// Enable GitHub Flavored Markdown extensions (tables, task lists, ...)
  pub gfm: bool,

  /// Rewrite `:::type` callout blocks into styled containers
  pub callouts: bool,

  /// Hand `mermaid` code blocks to the diagram renderer
  pub mermaid: bool,

  /// Mark other code blocks for the syntax highlighter
  pub highlight_code: bool,

  /// Wrap rendered output in a complete HTML page
  pub standalone: bool,
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      gfm:            true,
      callouts:       true,
      mermaid:        true,
      highlight_code: true,
      standalone:     false,
    }
  }
}

impl RenderConfig {
  /// Options for the markdown processor described by this configuration.
  #[must_use]
  pub const fn markdown_options(&self) -> MarkdownOptions {
    MarkdownOptions {
      gfm:            self.gfm,
      callouts:       self.callouts,
      mermaid:        self.mermaid,
      highlight_code: self.highlight_code,
    }
  }
}
