use ddoc_markdown::{
  DocumentStats,
  utils::stats::{count_lines, count_words, document_stats},
};

#[test]
fn test_empty_document_has_no_words() {
  assert_eq!(count_words(""), 0);
  assert_eq!(count_words("   \n\t  "), 0);
}

#[test]
fn test_word_separators() {
  assert_eq!(count_words("a\u{a0}b\u{3000}c\u{2028}d"), 4);
  assert_eq!(count_words("a\u{feff}b"), 2);
  // NEL is not a separator
  assert_eq!(count_words("a\u{85}b"), 1);
}

#[test]
fn test_count_is_deterministic() {
  let md = "# Plan\n\nShip `v2` **soon**.\n```\nskip me\n```\n";
  let first = document_stats(md);
  for _ in 0..3 {
    assert_eq!(count_words(md), first.words);
    assert_eq!(document_stats(md), first);
  }
}

#[test]
fn test_markup_punctuation_is_stripped() {
  assert_eq!(count_words("Hello **world**!"), 2);
  assert_eq!(count_words("~~struck~~ _under_ [link](url)"), 3);
}

#[test]
fn test_fenced_block_is_excluded() {
  assert_eq!(count_words("before\n```\ncode here\n```\nafter"), 2);
}

#[test]
fn test_fenced_block_with_language_is_excluded() {
  let md = "One two\n```mermaid\nflowchart TD\n  A --> B\n```\nthree";
  assert_eq!(count_words(md), 3);
}

#[test]
fn test_unbalanced_fence_does_not_panic() {
  // An unclosed fence is not stripped, its backticks count as one token
  let md = "start\n```\nnever closed";
  assert_eq!(count_words(md), 4);
}

#[test]
fn test_unbalanced_inline_code_is_kept() {
  assert_eq!(count_words("a `b c"), 3);
}

#[test]
fn test_heading_markers_do_not_count() {
  assert_eq!(count_words("# Title\n\n## Sub title"), 3);
}

#[test]
fn test_lines_follow_split_semantics() {
  assert_eq!(count_lines(""), 1);
  assert_eq!(count_lines("a"), 1);
  assert_eq!(count_lines("a\n"), 2);
  assert_eq!(count_lines("a\r\nb"), 2);
}

#[test]
fn test_document_stats() {
  let md = "# Notes\nSome `code` and *text*.\n";
  assert_eq!(document_stats(md), DocumentStats {
    words:      4,
    characters: md.chars().count(),
    lines:      3,
  });
}

#[test]
fn test_counting_is_idempotent() {
  let md = "Repeat *me* twice\n```\nignored\n```";
  assert_eq!(count_words(md), count_words(md));
  assert_eq!(document_stats(md), document_stats(md));
}
