use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

/// Command line interface for ddoc
#[derive(Parser, Debug)]
#[command(author, version, about = "ddoc: design documents in Markdown")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`]). Shows the document status
  /// when omitted.
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append, global = true)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append, global = true)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the ddoc CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new ddoc configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "ddoc.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Print the stored document.
  Show,

  /// Count words, characters and lines.
  Stats {
    /// Markdown file to read instead of the stored document.
    file: Option<PathBuf>,

    /// Print the statistics as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Print the table of contents.
  Toc {
    /// Markdown file to read instead of the stored document.
    file: Option<PathBuf>,

    /// Print the headings as JSON.
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// Print the headings as an HTML list of anchor links.
    #[arg(long)]
    html: bool,
  },

  /// Render the document to HTML.
  Render {
    /// Markdown file to read instead of the stored document.
    file: Option<PathBuf>,

    /// Write the HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the output in a standalone HTML page.
    #[arg(short, long)]
    standalone: bool,
  },

  /// Insert a toolbar snippet or literal text into the stored document.
  #[command(group(ArgGroup::new("insertion").required(true).args(["action", "text"])))]
  Insert {
    /// Toolbar action (heading1, heading2, bold, italic, bullet-list,
    /// numbered-list, quote, code-block, link, image).
    #[arg(short, long)]
    action: Option<String>,

    /// Literal text to insert.
    #[arg(short, long)]
    text: Option<String>,

    /// Character offset to insert at. Defaults to the end of the document.
    #[arg(long = "at")]
    at: Option<usize>,
  },

  /// Replace the stored document with a Markdown file.
  Import {
    /// Markdown file to import. Its name becomes the document title.
    file: PathBuf,
  },

  /// Write the stored document to a Markdown file named after its title.
  Export {
    /// Directory to export into. Defaults to `export_dir` from the config.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
  },

  /// Print or change the document title.
  Title {
    /// New title.
    title: Option<String>,
  },

  /// Print or change the color theme.
  Theme {
    /// New theme.
    #[arg(value_parser = ["light", "dark", "toggle"])]
    theme: Option<String>,
  },

  /// Print or change the editor mode.
  Mode {
    /// New editor mode.
    #[arg(value_parser = ["edit", "view", "split"])]
    mode: Option<String>,
  },

  /// Show title, save state, mode, theme and statistics.
  Status,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
