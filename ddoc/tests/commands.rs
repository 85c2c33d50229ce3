#![allow(clippy::unwrap_used, reason = "Fine in tests")]

use std::fs;

use ddoc::{cli::Commands, commands};
use ddoc_config::Config;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> Config {
  Config {
    store_path: dir.path().join(".ddoc").join("store.json"),
    export_dir: dir.path().join("exports"),
    ..Config::default()
  }
}

fn run(config: &Config, command: &Commands) -> String {
  let mut out = Vec::new();
  commands::run(Some(command), config, &mut out).unwrap();
  String::from_utf8(out).unwrap()
}

#[test]
fn test_stats_of_a_file() {
  let dir = TempDir::new().unwrap();
  let config = config_in(&dir);
  let file = dir.path().join("notes.md");
  fs::write(&file, "# Notes\nSome `code` and *text*.\n").unwrap();

  let output = run(&config, &Commands::Stats {
    file: Some(file),
    json: false,
  });

  assert_eq!(output, "Words: 4\nCharacters: 32\nLines: 3\n");
}

#[test]
fn test_stats_json() {
  let dir = TempDir::new().unwrap();
  let config = config_in(&dir);
  let file = dir.path().join("a.md");
  fs::write(&file, "one two").unwrap();

  let output = run(&config, &Commands::Stats {
    file: Some(file),
    json: true,
  });
  let value: serde_json::Value = serde_json::from_str(&output).unwrap();

  assert_eq!(value["words"], 2);
  assert_eq!(value["characters"], 7);
  assert_eq!(value["lines"], 1);
}

#[test]
fn test_toc_of_stored_default_document() {
  let dir = TempDir::new().unwrap();
  let config = config_in(&dir);

  let output = run(&config, &Commands::Toc {
    file: None,
    json: false,
    html: false,
  });

  assert_eq!(
    output,
    "- Design Document (#design-document)\n  - Overview (#overview)\n  - \
     Architecture (#architecture)\n  - Code Example (#code-example)\n  - \
     Notes (#notes)\n"
  );
}

#[test]
fn test_insert_persists_and_reports_cursor() {
  let dir = TempDir::new().unwrap();
  let mut config = config_in(&dir);
  config.default_content = Some("Hello".to_string());

  let output = run(&config, &Commands::Insert {
    action: Some("bold".to_string()),
    text:   None,
    at:     Some(5),
  });
  assert_eq!(output, "7\n");

  let output = run(&config, &Commands::Insert {
    action: None,
    text:   Some("!".to_string()),
    at:     None,
  });
  assert_eq!(output, "10\n");

  assert_eq!(run(&config, &Commands::Show), "Hello****!");
}

#[test]
fn test_unknown_action_is_an_error() {
  let dir = TempDir::new().unwrap();
  let config = config_in(&dir);

  let mut out = Vec::new();
  let result = commands::run(
    Some(&Commands::Insert {
      action: Some("strike".to_string()),
      text:   None,
      at:     None,
    }),
    &config,
    &mut out,
  );

  assert!(result.is_err());
  assert!(!config.store_path.exists());
}

#[test]
fn test_import_then_export() {
  let dir = TempDir::new().unwrap();
  let config = config_in(&dir);
  let source = dir.path().join("Payments RFC.md");
  let text = "# Payments\n\n:::warning\nPCI scope.\n:::\n";
  fs::write(&source, text).unwrap();

  let output = run(&config, &Commands::Import {
    file: source.clone(),
  });
  assert_eq!(output, "Payments RFC\n");

  let output = run(&config, &Commands::Export { output_dir: None });
  let exported = config.export_dir.join("payments-rfc.md");
  assert_eq!(output.trim_end(), exported.display().to_string());
  assert_eq!(fs::read_to_string(exported).unwrap(), text);
}

#[test]
fn test_theme_and_mode_preferences() {
  let dir = TempDir::new().unwrap();
  let config = config_in(&dir);

  assert_eq!(run(&config, &Commands::Theme { theme: None }), "light\n");
  assert_eq!(
    run(&config, &Commands::Theme {
      theme: Some("toggle".to_string()),
    }),
    "dark\n"
  );
  assert_eq!(run(&config, &Commands::Theme { theme: None }), "dark\n");

  assert_eq!(
    run(&config, &Commands::Mode {
      mode: Some("view".to_string()),
    }),
    "view\n"
  );
  assert_eq!(run(&config, &Commands::Mode { mode: None }), "view\n");
}

#[test]
fn test_render_standalone_page_to_file() {
  let dir = TempDir::new().unwrap();
  let config = config_in(&dir);
  let out_file = dir.path().join("site").join("index.html");

  run(&config, &Commands::Title {
    title: Some("Fallback".to_string()),
  });
  let output = run(&config, &Commands::Render {
    file:       None,
    output:     Some(out_file.clone()),
    standalone: true,
  });
  assert!(output.is_empty());

  let html = fs::read_to_string(out_file).unwrap();
  assert!(html.contains("<title>Design Document</title>"));
  assert!(html.contains("<pre class=\"mermaid\">"));
  assert!(html.contains("callout callout-info"));
}

#[test]
fn test_render_fragment_respects_overrides() {
  let dir = TempDir::new().unwrap();
  let mut config = config_in(&dir);
  config
    .apply_overrides(&["render.callouts=false".to_string()])
    .unwrap();
  let file = dir.path().join("c.md");
  fs::write(&file, ":::tip\nx\n:::\n").unwrap();

  let output = run(&config, &Commands::Render {
    file:       Some(file),
    output:     None,
    standalone: false,
  });

  assert!(output.contains(":::tip"));
  assert!(!output.contains("<html"));
}

#[test]
fn test_status_defaults() {
  let dir = TempDir::new().unwrap();
  let config = config_in(&dir);

  let mut out = Vec::new();
  commands::run(None, &config, &mut out).unwrap();
  let output = String::from_utf8(out).unwrap();

  assert!(output.contains("Title:      Untitled Document"));
  assert!(output.contains("Last saved: never"));
  assert!(output.contains("Mode:       split (editor + preview)"));
  assert!(output.contains("Theme:      light"));
  assert!(output.contains(&format!(
    "Store:      {}",
    config.store_path.display()
  )));
}

#[test]
fn test_status_reports_visible_panes() {
  let dir = TempDir::new().unwrap();
  let config = config_in(&dir);

  run(&config, &Commands::Mode {
    mode: Some("view".to_string()),
  });
  assert!(run(&config, &Commands::Status).contains("Mode:       view (preview)"));

  run(&config, &Commands::Mode {
    mode: Some("edit".to_string()),
  });
  assert!(run(&config, &Commands::Status).contains("Mode:       edit (editor)"));
}

#[test]
fn test_config_preferences_seed_a_new_store() {
  let dir = TempDir::new().unwrap();
  let mut config = config_in(&dir);
  config
    .apply_overrides(&["theme=dark".to_string(), "editor_mode=view".to_string()])
    .unwrap();

  assert_eq!(run(&config, &Commands::Theme { theme: None }), "dark\n");
  assert_eq!(run(&config, &Commands::Mode { mode: None }), "view\n");
}
