//! Preview rendering for design documents.
//!
//! # Architecture
//!
//! - [`core`]: `MarkdownProcessor` and the rendering pipeline
//! - [`extensions`]: callout rewriting and HTML post-processing that hands
//!   diagrams and code blocks to client-side collaborators
//! - [`types`]: configuration structures
pub mod core;
pub mod extensions;
pub mod types;

pub use extensions::{
  CalloutKind,
  anchor_headings,
  rewrite_callouts,
  route_code_blocks,
  style_callouts,
};
pub use types::{MarkdownOptions, MarkdownOptionsBuilder, MarkdownProcessor};
