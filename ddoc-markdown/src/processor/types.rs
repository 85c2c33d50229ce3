//! Type definitions for the preview renderer.
//!
//! # Examples
//!
//! ```
//! use ddoc_markdown::{MarkdownOptions, MarkdownProcessor};
//!
//! let options = MarkdownOptions {
//!   gfm: true,
//!   mermaid: false,
//!   ..Default::default()
//! };
//!
//! let processor = MarkdownProcessor::new(options);
//! ```

/// Options for configuring the preview renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct MarkdownOptions {
  /// Enable GitHub Flavored Markdown (GFM) extensions.
  pub gfm: bool,

  /// Rewrite `:::type` callout blocks and style the resulting containers.
  pub callouts: bool,

  /// Hand fenced `mermaid` blocks to the diagram renderer as
  /// `<pre class="mermaid">`.
  pub mermaid: bool,

  /// Mark other fenced code blocks for the client-side syntax highlighter.
  pub highlight_code: bool,
}

impl MarkdownOptions {
  /// Enable all available features based on compile-time feature flags.
  #[must_use]
  pub const fn with_all_features() -> Self {
    Self {
      gfm:            cfg!(feature = "gfm"),
      callouts:       true,
      mermaid:        true,
      highlight_code: true,
    }
  }
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self::with_all_features()
  }
}

/// Preview renderer for design documents.
///
/// Holds no state beyond its options, so one instance can render any number
/// of documents.
#[derive(Debug, Clone)]
pub struct MarkdownProcessor {
  pub(crate) options: MarkdownOptions,
}

/// Builder for constructing `MarkdownOptions` with method chaining.
#[derive(Debug, Clone)]
pub struct MarkdownOptionsBuilder {
  options: MarkdownOptions,
}

impl MarkdownOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self {
      options: MarkdownOptions::default(),
    }
  }

  /// Enable or disable GitHub Flavored Markdown.
  #[must_use]
  pub const fn gfm(mut self, enabled: bool) -> Self {
    self.options.gfm = enabled;
    self
  }

  /// Enable or disable callout rewriting.
  #[must_use]
  pub const fn callouts(mut self, enabled: bool) -> Self {
    self.options.callouts = enabled;
    self
  }

  /// Enable or disable mermaid diagram routing.
  #[must_use]
  pub const fn mermaid(mut self, enabled: bool) -> Self {
    self.options.mermaid = enabled;
    self
  }

  /// Enable or disable code block markup for the highlighter.
  #[must_use]
  pub const fn highlight_code(mut self, enabled: bool) -> Self {
    self.options.highlight_code = enabled;
    self
  }

  /// Build the final `MarkdownOptions`.
  #[must_use]
  pub const fn build(self) -> MarkdownOptions {
    self.options
  }
}

impl Default for MarkdownOptionsBuilder {
  fn default() -> Self {
    Self::new()
  }
}
