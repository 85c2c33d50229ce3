//! Standalone HTML page around a rendered preview.
use ddoc_document::Theme;
use ddoc_markdown::{MarkdownResult, utils::toc_html};
use tera::Tera;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// Wrap a rendered document in a self-contained HTML page.
///
/// The page links the diagram renderer and syntax highlighter only when the
/// corresponding features are enabled.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_page(
  result: &MarkdownResult,
  title: &str,
  theme: Theme,
  mermaid: bool,
  highlight: bool,
) -> Result<String, tera::Error> {
  let mut tera = Tera::default();
  tera.add_raw_template("page.html", PAGE_TEMPLATE)?;

  let (mermaid_theme, highlight_style) = match theme {
    Theme::Light => ("neutral", "github"),
    Theme::Dark => ("dark", "github-dark"),
  };

  let mut context = tera::Context::new();
  context.insert("title", title);
  context.insert("content", &result.html);
  context.insert("toc", &toc_html(&result.headings));
  context.insert("stats", &result.stats);
  context.insert("theme", theme.as_str());
  context.insert("version", env!("CARGO_PKG_VERSION"));
  context.insert("mermaid", &mermaid);
  context.insert("mermaid_theme", mermaid_theme);
  context.insert("highlight", &highlight);
  context.insert("highlight_style", highlight_style);

  tera.render("page.html", &context)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine in tests")]
mod tests {
  use ddoc_markdown::{MarkdownOptions, MarkdownProcessor};

  use super::*;

  #[test]
  fn test_page_escapes_title_and_keeps_html() {
    let result = MarkdownProcessor::new(MarkdownOptions::default())
      .render("# Plan\n\n:::tip\nShip it.\n:::\n");
    let page =
      render_page(&result, "Q&A <draft>", Theme::Dark, false, false).unwrap();

    assert!(page.contains("<title>Q&amp;A &lt;draft&gt;</title>"));
    assert!(page.contains(r#"<html lang="en" class="theme-dark">"#));
    assert!(page.contains(r#"<h1 id="plan">Plan</h1>"#));
    assert!(page.contains(r##"<a href="#plan">Plan</a>"##));
    assert!(page.contains("callout callout-tip"));
    assert!(!page.contains("mermaid.esm"));
    assert!(!page.contains("highlight.min.js"));
  }

  #[test]
  fn test_page_loads_collaborators_when_enabled() {
    let result =
      MarkdownProcessor::new(MarkdownOptions::default()).render("text");
    let page = render_page(&result, "Doc", Theme::Light, true, true).unwrap();

    assert!(page.contains(r#"theme: "neutral""#));
    assert!(page.contains("styles/github.min.css"));
    assert!(!page.contains("<nav"));
  }
}
