use std::fmt;

/// Error type for template operations.
#[derive(Debug)]
pub enum TemplateError {
  /// Indicates that the requested configuration format is not supported.
  /// Contains the name of the unsupported format.
  UnsupportedFormat(String),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedFormat(format) => {
        write!(f, "Unsupported config format: {format}")
      },
    }
  }
}

impl std::error::Error for TemplateError {}

/// Default configuration template in TOML, commented so that a fresh file
/// explains itself.
pub const DEFAULT_TOML_TEMPLATE: &str = r##"# ddoc Configuration File

# Where the document, its title and editor preferences are stored
store_path = ".ddoc/store.json"

# Directory that `ddoc export` writes markdown files to
export_dir = "."

# Title given to a brand new document
default_title = "Untitled Document"

# Initial content of a brand new document. Leave unset to use the built-in
# starter document.
# default_content = "# My Design\n"

# Initial theme preference: "light" or "dark"
theme = "light"

# Initial editor mode: "edit", "view" or "split"
editor_mode = "split"

[render]
# GitHub Flavored Markdown (tables, task lists, strikethrough, autolinks)
gfm = true

# Turn `:::type` blocks into styled callout boxes
callouts = true

# Hand ```mermaid blocks to the diagram renderer
mermaid = true

# Mark other code blocks for the syntax highlighter
highlight_code = true

# Wrap `ddoc render` output in a complete HTML page
standalone = false
"##;

/// Default configuration template in JSON format.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "store_path": ".ddoc/store.json",
  "export_dir": ".",
  "default_title": "Untitled Document",
  "theme": "light",
  "editor_mode": "split",
  "render": {
    "gfm": true,
    "callouts": true,
    "mermaid": true,
    "highlight_code": true,
    "standalone": false
  }
}
"#;

/// Get the correct configuration template based on the requested format.
///
/// # Errors
///
/// Returns an error if the requested format is not supported.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}
