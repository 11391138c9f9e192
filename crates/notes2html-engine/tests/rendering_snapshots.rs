use notes2html_engine::{ParseError, RenderOptions, parse, parse_note};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn fixture_list_note() {
    assert_fixture("list_note");
}

#[test]
fn fixture_narrative_note() {
    assert_fixture("narrative_note");
}

fn assert_fixture(name: &str) {
    let text = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let html = parse_note(&text, &RenderOptions::default()).unwrap();
    insta::assert_snapshot!(name, html);
}

#[rstest]
#[case::one_space(&["*alpha*", " bravo"], "Unsupported number of spaces [1] in line [ bravo]")]
#[case::too_nested(
    &["*alpha*", "bravo", "                                                     charlie"],
    "Unsupported number of spaces [53] in line [                                                     charlie]"
)]
#[case::narrative_nested(
    &["*alpha*narrative", "bravo", "    charlie", "        delta"],
    "Unsupported number of spaces [8] in line [        delta]"
)]
#[case::heading_without_text(&["*alpha*", "bravo"], "Failed to parse, found title[bravo] with no text")]
#[case::two_headings_without_text(
    &["*alpha*", "bravo", "charlie", ""],
    "Failed to parse, found title[bravo] with no text"
)]
#[case::second_heading_without_text(
    &["*alpha*", "bravo", "    charlie", "delta"],
    "Failed to parse, found title[delta] with no text"
)]
#[case::text_before_heading(&["*alpha*", "    charlie"], "Failed to parse, found text[    charlie] before any title")]
fn malformed_notes_fail_with_message(#[case] lines: &[&str], #[case] message: &str) {
    let err = parse(lines).unwrap_err();
    assert_eq!(err.to_string(), message);
}

#[test]
fn toc_is_one_to_one_with_sections() {
    let html = parse(&[
        "*alpha*", "one", "    a", "two", "    b", "three", "    c",
    ])
    .unwrap();

    let toc: Vec<_> = html.match_indices("<a href='#").map(|(i, _)| i).collect();
    let anchors: Vec<_> = html.match_indices("<a name='").map(|(i, _)| i).collect();
    assert_eq!(toc.len(), 3);
    assert_eq!(anchors.len(), 3);
    for heading in ["one", "two", "three"] {
        assert!(html.contains(&format!("<a href='#{heading}'>{heading}</a>")));
        assert!(html.contains(&format!("<a name='{heading}'></a>")));
    }
}

#[test]
fn headings_are_escaped_but_not_emphasized() {
    let html = parse(&["*alpha*", "a **b** & <c>", "    d"]).unwrap();
    assert!(html.contains("<legend>a **b** &amp; &lt;c&gt;</legend>"));
    assert!(!html.contains("<strong>b</strong>"));
}

#[test]
fn title_is_escaped() {
    let html = parse(&["*a & b*"]).unwrap();
    assert!(html.contains("<title>a &amp; b</title>"));
    assert!(html.contains("<legend>a &amp; b ToC</legend>"));
}

#[test]
fn errors_are_comparable() {
    let err = parse(&["*alpha*", "\t\tbravo"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnsupportedIndentation {
            count: 5,
            line: "     bravo".to_string(),
        }
    );
}
