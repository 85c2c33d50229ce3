//! Handlers for the document subcommands.
//!
//! Every handler writes its result to `out` so it can be captured in tests;
//! diagnostics go through `log`.
use std::{
  fs,
  io::Write,
  path::Path,
};

use color_eyre::eyre::{Context, Result, bail};
use ddoc_config::Config;
use ddoc_document::{
  DEFAULT_CONTENT,
  DocumentDefaults,
  DocumentSession,
  EditorMode,
  FileStore,
  Theme,
  ToolbarAction,
};
use ddoc_markdown::{MarkdownProcessor, utils::toc_html};
use jiff::tz::TimeZone;

use crate::{cli::Commands, page};

/// Open the document session described by `config`.
///
/// # Errors
///
/// Returns an error if the store file cannot be read or parsed.
pub fn open_session(config: &Config) -> Result<DocumentSession<FileStore>> {
  let store = FileStore::open(&config.store_path).wrap_err_with(|| {
    format!("Failed to open document store {}", config.store_path.display())
  })?;

  let defaults = DocumentDefaults {
    title:       config.default_title.clone(),
    content:     config
      .default_content
      .clone()
      .unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
    theme:       config.theme,
    editor_mode: config.editor_mode,
  };

  Ok(DocumentSession::open(store, &defaults)?)
}

/// Run a document subcommand. `None` shows the status.
///
/// # Errors
///
/// Returns an error if the command fails or its output cannot be written.
pub fn run<W: Write>(
  command: Option<&Commands>,
  config: &Config,
  out: &mut W,
) -> Result<()> {
  let Some(command) = command else {
    return status(config, out);
  };

  match command {
    Commands::Init { .. } => {
      bail!("`init` is handled before configuration is loaded")
    },
    Commands::Show => {
      let session = open_session(config)?;
      write!(out, "{}", session.content())?;
    },
    Commands::Stats { file, json } => stats(config, file.as_deref(), *json, out)?,
    Commands::Toc { file, json, html } => {
      toc(config, file.as_deref(), *json, *html, out)?;
    },
    Commands::Render {
      file,
      output,
      standalone,
    } => {
      render(config, file.as_deref(), output.as_deref(), *standalone, out)?;
    },
    Commands::Insert { action, text, at } => {
      insert(config, action.as_deref(), text.as_deref(), *at, out)?;
    },
    Commands::Import { file } => import(config, file, out)?,
    Commands::Export { output_dir } => {
      let session = open_session(config)?;
      let dir = output_dir.as_ref().unwrap_or(&config.export_dir);
      let path = session
        .export_markdown(dir)
        .wrap_err_with(|| format!("Failed to export to {}", dir.display()))?;
      writeln!(out, "{}", path.display())?;
    },
    Commands::Title { title } => {
      let mut session = open_session(config)?;
      if let Some(title) = title {
        session.update_title(title.as_str());
        session.save()?;
      }
      writeln!(out, "{}", session.title())?;
    },
    Commands::Theme { theme } => {
      let mut session = open_session(config)?;
      match theme.as_deref() {
        None => {},
        Some("toggle") => {
          session.toggle_theme()?;
        },
        Some(name) => session.set_theme(name.parse::<Theme>()?)?,
      }
      writeln!(out, "{}", session.theme())?;
    },
    Commands::Mode { mode } => {
      let mut session = open_session(config)?;
      if let Some(mode) = mode {
        session.set_editor_mode(mode.parse::<EditorMode>()?)?;
      }
      writeln!(out, "{}", session.editor_mode())?;
    },
    Commands::Status => status(config, out)?,
  }

  Ok(())
}

/// Document text and a title for it: from `file` when given, otherwise the
/// stored document.
fn source_text(config: &Config, file: Option<&Path>) -> Result<(String, String)> {
  if let Some(path) = file {
    let text = fs::read_to_string(path)
      .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let title = ddoc_document::transfer::title_from_path(path)
      .unwrap_or_else(|| config.default_title.clone());
    return Ok((text, title));
  }

  let session = open_session(config)?;
  Ok((session.content().to_string(), session.title().to_string()))
}

fn stats<W: Write>(
  config: &Config,
  file: Option<&Path>,
  json: bool,
  out: &mut W,
) -> Result<()> {
  let (text, _) = source_text(config, file)?;
  let stats = ddoc_markdown::utils::stats::document_stats(&text);

  if json {
    writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
  } else {
    writeln!(out, "Words: {}", stats.words)?;
    writeln!(out, "Characters: {}", stats.characters)?;
    writeln!(out, "Lines: {}", stats.lines)?;
  }
  Ok(())
}

fn toc<W: Write>(
  config: &Config,
  file: Option<&Path>,
  json: bool,
  html: bool,
  out: &mut W,
) -> Result<()> {
  let (text, _) = source_text(config, file)?;
  let headings = ddoc_markdown::utils::extract_headings(&text);

  if json {
    writeln!(out, "{}", serde_json::to_string_pretty(&headings)?)?;
  } else if html {
    writeln!(out, "{}", toc_html(&headings))?;
  } else {
    for heading in &headings {
      let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
      writeln!(out, "{indent}- {} (#{})", heading.text, heading.id)?;
    }
  }
  Ok(())
}

fn render<W: Write>(
  config: &Config,
  file: Option<&Path>,
  output: Option<&Path>,
  standalone: bool,
  out: &mut W,
) -> Result<()> {
  let (text, fallback_title) = source_text(config, file)?;
  let processor = MarkdownProcessor::new(config.render.markdown_options());
  let result = processor.render(&text);

  let html = if standalone || config.render.standalone {
    let theme = open_session(config)?.theme();
    let title = result.title.as_deref().unwrap_or(&fallback_title);
    page::render_page(
      &result,
      title,
      theme,
      processor.options().mermaid,
      processor.options().highlight_code,
    )
    .wrap_err("Failed to render standalone page")?
  } else {
    result.html
  };

  if let Some(path) = output {
    write_output(path, &html)?;
    log::info!("Rendered {} to {}", fallback_title, path.display());
  } else {
    write!(out, "{html}")?;
  }
  Ok(())
}

fn write_output(path: &Path, html: &str) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
    && !parent.exists()
  {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create directory: {}", parent.display())
    })?;
  }
  fs::write(path, html)
    .wrap_err_with(|| format!("Failed to write {}", path.display()))
}

fn insert<W: Write>(
  config: &Config,
  action: Option<&str>,
  text: Option<&str>,
  at: Option<usize>,
  out: &mut W,
) -> Result<()> {
  let mut session = open_session(config)?;
  let cursor = at.unwrap_or_else(|| session.content().chars().count());

  let new_cursor = match (action, text) {
    (Some(name), _) => {
      let action = name.parse::<ToolbarAction>()?;
      log::info!("Inserting {} at {cursor}", action.label());
      session.apply_toolbar_action(action, cursor)
    },
    (None, Some(text)) => session.insert(cursor, text),
    (None, None) => bail!("Nothing to insert: pass --action or --text"),
  };

  session.save()?;
  writeln!(out, "{new_cursor}")?;
  Ok(())
}

fn import<W: Write>(config: &Config, file: &Path, out: &mut W) -> Result<()> {
  let mut session = open_session(config)?;
  if session
    .import_markdown(file)
    .wrap_err_with(|| format!("Failed to import {}", file.display()))?
  {
    session.save()?;
  }
  writeln!(out, "{}", session.title())?;
  Ok(())
}

fn status<W: Write>(config: &Config, out: &mut W) -> Result<()> {
  let session = open_session(config)?;
  let stats = session.stats();

  let saved = session.last_saved().map_or_else(
    || "never".to_string(),
    |ts| {
      ts.to_zoned(TimeZone::system())
        .strftime("%Y-%m-%d %H:%M:%S")
        .to_string()
    },
  );

  writeln!(out, "Title:      {}", session.title())?;
  writeln!(out, "Last saved: {saved}")?;
  writeln!(
    out,
    "Mode:       {} ({})",
    session.editor_mode(),
    panes(session.editor_mode())
  )?;
  writeln!(out, "Theme:      {}", session.theme())?;
  writeln!(
    out,
    "Stats:      {} words, {} characters, {} lines",
    stats.words, stats.characters, stats.lines
  )?;
  writeln!(out, "Store:      {}", session.store().path().display())?;
  Ok(())
}

/// Panes visible in `mode`.
const fn panes(mode: EditorMode) -> &'static str {
  match (mode.shows_editor(), mode.shows_preview()) {
    (true, true) => "editor + preview",
    (true, false) => "editor",
    (false, true) => "preview",
    (false, false) => "none",
  }
}
