//! Fixture tests for the rendering pipeline.
//!
//! Each fixture is a `.md` document next to the `.html` it must render to.


use pretty_assertions::assert_eq;

use crate::rendering::{RenderOptions, render, render_with, transform};

// Fixture-based tests

#[test]
fn fixture_basic_blocks() {
    assert_fixture("basic_blocks");
}

#[test]
fn fixture_code_fence() {
    assert_fixture("code_fence");
}

#[test]
fn fixture_unsupported_diagram() {
    assert_fixture("unsupported_diagram");
}

#[test]
fn fixture_mixed_lists() {
    assert_fixture("mixed_lists");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/rendering/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let html = render(&md);
    invariants::check(&md, &html);

    assert_eq!(html, expected.trim_end_matches('\n'));
}

// Pipeline tests

#[test]
fn crlf_input_renders_like_lf() {
    assert_eq!(
        render("# Title\r\n\r\nBody\r\n"),
        render("# Title\n\nBody\n")
    );
}

#[test]
fn placeholder_marks_in_input_are_dropped() {
    let html = render("a\u{1A}diagram:0\u{1A}b");
    assert_eq!(html, "<p>adiagram:0b</p>");
}

#[test]
fn diagram_inside_paragraph_is_still_restored() {
    let html = render("text before\n```mermaid\npie\n```");
    invariants::check("", &html);
    assert!(html.starts_with("<p>text before\n<div class=\"diagram diagram-unsupported\""));
    assert!(html.ends_with("</div></p>"));
}

#[test]
fn diagram_body_is_not_touched_by_stages() {
    let html = render("```mermaid\nflowchart\nA[**Start**] --> B[# End]\n```");
    assert!(html.contains("**Start**"));
    assert!(!html.contains("<strong>"));
    assert!(!html.contains("<h1>"));
}

#[test]
fn transform_runs_stages_in_order() {
    // Headings run before lists, so a heading line never becomes a list item.
    assert_eq!(transform("# - a"), "<h1>- a</h1>");
    assert_eq!(transform("- **a**"), "<ul>\n<li><strong>a</strong></li>\n</ul>");
}

#[test]
fn escaping_is_off_by_default() {
    assert_eq!(render("<b>hi</b>"), "<p><b>hi</b></p>");
}

#[test]
fn escaping_neutralizes_author_markup() {
    let options = RenderOptions {
        escape_html: true,
        ..RenderOptions::default()
    };
    let html = render_with("<script>alert(1)</script> **ok**", &options);
    assert_eq!(
        html,
        "<p>&lt;script&gt;alert(1)&lt;/script&gt; <strong>ok</strong></p>"
    );
}
