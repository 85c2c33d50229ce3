//! # ddoc-markdown
//!
//! Text-transform pipeline for design documents written in Markdown, plus a
//! small preview renderer built on `comrak`.
//!
//! The pipeline is a set of pure functions over the document text:
//!
//! - **Heading extraction** for tables of contents
//!   ([`utils::extract_headings`])
//! - **Document statistics** (words, characters, lines) for status displays
//!   ([`utils::stats::document_stats`])
//! - **Callout rewriting** of `:::type` blocks into raw container markup
//!   ([`processor::rewrite_callouts`])
//! - **Cursor-relative insertion** for editor toolbar actions
//!   ([`utils::insert_at_cursor`])
//!
//! ## Quick Start
//!
//! ```rust
//! use ddoc_markdown::{MarkdownOptions, MarkdownProcessor};
//!
//! let processor = MarkdownProcessor::new(MarkdownOptions::default());
//! let result = processor.render("# Design\n\n:::tip\nKeep it short.\n:::");
//!
//! println!("HTML: {}", result.html);
//! println!("Title: {:?}", result.title);
//! println!("Words: {}", result.stats.words);
//! ```
//!
//! ## Using the pipeline directly
//!
//! ```rust
//! use ddoc_markdown::utils::{extract_headings, insert_at_cursor, stats};
//!
//! let headings = extract_headings("# A\n## B\n");
//! assert_eq!(headings[1].id, "b");
//!
//! assert_eq!(stats::count_words("Hello **world**!"), 2);
//!
//! let insertion = insert_at_cursor("ab", 1, "X");
//! assert_eq!(insertion.content, "aXb");
//! assert_eq!(insertion.cursor, 2);
//! ```

pub mod processor;
mod types;
pub mod utils;

pub use crate::{
  processor::{
    CalloutKind,
    MarkdownOptions,
    MarkdownOptionsBuilder,
    MarkdownProcessor,
    rewrite_callouts,
  },
  types::{DocumentStats, Heading, Insertion, MarkdownResult},
};
