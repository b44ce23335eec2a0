use jira2md_engine::{
    convert,
    parsing::{invariants, parse_document},
};
use pretty_assertions::assert_eq;

#[test]
fn fixture_headings() {
    assert_fixture("headings");
}

#[test]
fn fixture_text_effects() {
    assert_fixture("text_effects");
}

#[test]
fn fixture_links() {
    assert_fixture("links");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_tables() {
    assert_fixture("tables");
}

#[test]
fn fixture_nesting() {
    assert_fixture("nesting");
}

#[test]
fn fixture_advanced_blocks() {
    assert_fixture("advanced_blocks");
}

#[test]
fn fixture_issue() {
    assert_fixture("issue");
}

fn read_fixture(file: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{file}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str) {
    let input = read_fixture(&format!("{name}.jira"));
    let expected = read_fixture(&format!("{name}.md"));

    invariants::check(&parse_document(&input));
    assert_eq!(convert(&input), expected.trim_end_matches('\n'));
}

/// CRLF around a code body is stripped the same way as LF.
#[test]
fn crlf_code_block() {
    assert_eq!(convert("{code}\r\nfoo\r\n{code}"), "```\nfoo\n```");
}

#[test]
fn crlf_heading_and_quote_lines() {
    assert_eq!(convert("h1. Title\r\nbody"), "# Title\n\nbody");
    assert_eq!(convert("bq. quoted\r\nnext"), "> quoted\n\nnext");
}

#[test]
fn conversion_is_deterministic() {
    let input = read_fixture("issue.jira");
    assert_eq!(convert(&input), convert(&input));
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(convert("just words"), "just words");
}
