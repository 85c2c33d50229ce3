//! Core implementation of the preview renderer.
//!
//! The pipeline runs callout rewriting on the source, hands the result to
//! `comrak` with raw HTML passthrough enabled, then post-processes the HTML so
//! that diagram and code blocks reach the right client-side collaborator.
use comrak::{markdown_to_html, options::Options};
use log::trace;

use super::{
  extensions::{anchor_headings, rewrite_callouts, route_code_blocks, style_callouts},
  types::{MarkdownOptions, MarkdownProcessor},
};
use crate::{
  types::MarkdownResult,
  utils::{self, stats::document_stats},
};

impl MarkdownProcessor {
  /// Create a new `MarkdownProcessor` with the given options.
  #[must_use]
  pub const fn new(options: MarkdownOptions) -> Self {
    Self { options }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// Render Markdown to HTML, extracting headings, title and statistics.
  ///
  /// Headings and statistics always describe the source text as written, not
  /// the rewritten form handed to the renderer.
  #[must_use]
  pub fn render(&self, markdown: &str) -> MarkdownResult {
    let headings = utils::extract_headings(markdown);
    let title = utils::extract_title(markdown);
    let stats = document_stats(markdown);

    let source = if self.options.callouts {
      rewrite_callouts(markdown)
    } else {
      markdown.into()
    };
    let html = self.process_html_pipeline(&source);

    MarkdownResult {
      html,
      headings,
      title,
      stats,
    }
  }

  /// Process the HTML generation and post-processing pipeline.
  fn process_html_pipeline(&self, content: &str) -> String {
    let mut html = anchor_headings(&self.convert_to_html(content));

    if self.options.mermaid || self.options.highlight_code {
      html = route_code_blocks(
        &html,
        self.options.mermaid,
        self.options.highlight_code,
      );
    }

    if self.options.callouts {
      html = style_callouts(&html);
    }

    html
  }

  /// Convert markdown to HTML using comrak and configured options.
  fn convert_to_html(&self, content: &str) -> String {
    trace!("Rendering {} bytes of markdown", content.len());
    let options = self.comrak_options();
    markdown_to_html(content, &options)
  }

  /// Build comrak options from `MarkdownOptions`.
  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    if self.options.gfm {
      options.extension.table = true;
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.autolink = true;
      options.extension.footnotes = true;
    }
    // Callout containers are emitted as raw HTML
    options.render.r#unsafe = true;
    options
  }
}
