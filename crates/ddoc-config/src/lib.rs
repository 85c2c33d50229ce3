pub mod config;
pub mod error;
pub mod prefs;
pub mod render;
pub mod templates;

pub use config::Config;
pub use error::ConfigError;
pub use prefs::{EditorMode, Theme};
pub use render::RenderConfig;
