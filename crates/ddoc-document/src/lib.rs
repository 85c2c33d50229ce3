//! Document state, persistence and editor actions for ddoc.
//!
//! A [`DocumentSession`] owns the text and title of the document being
//! edited, tracks whether it has unsaved changes, and persists it together
//! with the editor preferences through a [`KeyValueStore`].
pub mod document;
pub mod error;
pub mod store;
pub mod toolbar;
pub mod transfer;

pub use document::{DEFAULT_CONTENT, DocumentDefaults, DocumentSession, DocumentState};
pub use error::DocumentError;
pub use ddoc_config::{EditorMode, Theme};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use toolbar::ToolbarAction;
