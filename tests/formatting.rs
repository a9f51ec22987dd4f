//! End-to-end formatting tests
//!
//! Each case runs a markup string through the public pipeline and checks the
//! resulting fragment list, either structurally or as compact JSON (the shape
//! a layout engine receives).

use fmtext::formats::FormatRegistry;
use fmtext::theme::ThemeLoader;
use fmtext::{format, Color, FormatOptions, Formatter, Fragment, TextStyle, Transform};
use rstest::rstest;

fn to_json(fragments: &[Fragment]) -> String {
    serde_json::to_string(fragments).expect("fragments serialize")
}

#[rstest]
#[case::plain("plain text")]
#[case::whitespace("  spaced\n\tout  ")]
#[case::greater_than("a > b")]
#[case::empty("")]
fn test_no_markup_is_returned_verbatim(#[case] input: &str) {
    assert_eq!(format(input), vec![Fragment::text(input)]);
}

#[rstest]
#[case::unterminated("<b>unterminated")]
#[case::stray_lt("1 < 2")]
#[case::bare_ampersand("fish & chips")]
#[case::unknown_entity("&nbsp;")]
#[case::mismatched("<b>x</i>")]
#[case::stray_close("x</b>")]
#[case::unquoted_attribute("<color rgb=FF0000>x</color>")]
#[case::bare_attribute("<b x>y</b>")]
fn test_malformed_markup_falls_back_to_literal(#[case] input: &str) {
    assert_eq!(format(input), vec![Fragment::text(input)]);
}

#[test]
fn test_escaped_tag_is_text() {
    assert_eq!(format("&lt;b&gt;"), vec![Fragment::text("<b>")]);
}

#[test]
fn test_numeric_entities() {
    assert_eq!(
        format("&#65;&#x42;&#X43; &quot;&apos;&amp;"),
        vec![Fragment::text("ABC \"'&")]
    );
}

#[test]
fn test_line_break_merging() {
    assert_eq!(
        format("a<br>b"),
        vec![Fragment::text("a\n"), Fragment::text("b")]
    );
    assert_eq!(format("a<br/>b"), format("a<br>b"));
    assert_eq!(format("ab"), vec![Fragment::text("ab")]);
}

#[rstest]
#[case::spaced_void("a<br />b")]
#[case::spaced_void_no_slash("a<br >b")]
#[case::newline_in_void("a<br\n/>b")]
fn test_line_break_with_whitespace_in_tag(#[case] input: &str) {
    assert_eq!(format(input), format("a<br>b"));
}

#[rstest]
#[case::bold(r#"<b >x</b>"#, "x")]
#[case::link_attribute(r#"<a href="x" >y</a>"#, "y")]
#[case::link_single_quotes("<a href='x'\t>y</a >", "y")]
fn test_whitespace_before_closing_bracket(#[case] input: &str, #[case] text: &str) {
    let fragments = format(input);
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].text, text);
    assert!(!fragments[0].is_plain());
}

#[rstest]
#[case::empty_bold("a<b />c")]
#[case::empty_link(r#"a<a href="x" />c"#)]
fn test_self_closing_element_with_whitespace(#[case] input: &str) {
    assert_eq!(format(input), vec![Fragment::text("a"), Fragment::text("c")]);
}

#[test]
fn test_bold_nesting() {
    insta::assert_snapshot!(
        to_json(&format("<b>x<i>y</i>z</b>")),
        @r#"[{"text":"x","styles":["bold"]},{"text":"y","styles":["bold","italic"]},{"text":"z","styles":["bold"]}]"#
    );
}

#[rstest]
#[case::rgb_attribute(r##"<color rgb="#FF0000">x</color>"##)]
#[case::rgb_without_hash(r#"<color rgb="FF0000">x</color>"#)]
#[case::channels(r#"<color r="255" g="0" b="0">x</color>"#)]
#[case::single_quotes("<color r='255' g='0' b='0'>x</color>")]
fn test_color_forms_agree(#[case] input: &str) {
    assert_eq!(
        format(input),
        vec![Fragment::text("x").with_color(Color::hex("FF0000"))]
    );
}

#[test]
fn test_cmyk_color() {
    insta::assert_snapshot!(
        to_json(&format(r#"<color c="0" m="100" y="100" k="0">x</color>"#)),
        @r#"[{"text":"x","color":[0,100,100,0]}]"#
    );
}

#[test]
fn test_incomplete_color_is_ignored() {
    assert_eq!(
        format(r#"<color r="255" g="0">x</color>"#),
        vec![Fragment::text("x")]
    );
}

#[test]
fn test_empty_rgb_is_ignored() {
    assert_eq!(
        format(r#"<color rgb="">x</color>"#),
        vec![Fragment::text("x")]
    );
}

#[test]
fn test_link_default_color() {
    insta::assert_snapshot!(
        to_json(&format(r#"<a href="http://x">x</a>"#)),
        @r#"[{"text":"x","color":"0000FF","link":"http://x"}]"#
    );
}

#[test]
fn test_anchor_and_local_links() {
    let fragments = format(r#"<a anchor="top">a</a><link local="file.pdf">b</link>"#);
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].anchor.as_deref(), Some("top"));
    assert_eq!(fragments[0].color, Some(Color::hex("0000FF")));
    assert_eq!(fragments[1].local.as_deref(), Some("file.pdf"));
}

#[test]
fn test_span_style() {
    insta::assert_snapshot!(
        to_json(&format(r#"<span style="color: #abc; font-weight: bold">x</span>"#)),
        @r#"[{"text":"x","color":"abc","styles":["bold"]}]"#
    );
}

#[test]
fn test_code_without_theme() {
    insta::assert_snapshot!(
        to_json(&format("run <code>ls</code>")),
        @r#"[{"text":"run "},{"text":"ls","font":"Courier","size":0.9,"character_spacing":-0.1}]"#
    );
}

#[test]
fn test_font_attributes() {
    insta::assert_snapshot!(
        to_json(&format(r#"<font name="Noto Serif" size="12" character_spacing="0.5">x</font>"#)),
        @r#"[{"text":"x","font":"Noto Serif","size":12.0,"character_spacing":0.5}]"#
    );
}

#[rstest]
#[case::underline("u", TextStyle::Underline)]
#[case::del("del", TextStyle::Strikethrough)]
#[case::strikethrough("strikethrough", TextStyle::Strikethrough)]
#[case::sub("sub", TextStyle::Subscript)]
#[case::sup("sup", TextStyle::Superscript)]
#[case::strong("strong", TextStyle::Bold)]
#[case::em("em", TextStyle::Italic)]
fn test_style_tags(#[case] tag: &str, #[case] style: TextStyle) {
    let input = format!("<{tag}>x</{tag}>");
    assert_eq!(format(&input), vec![Fragment::text("x").with_style(style)]);
}

#[test]
fn test_styles_accumulate_through_nesting() {
    let fragments = format("<u><sup><i>x</i></sup></u>");
    assert_eq!(fragments.len(), 1);
    assert!(fragments[0].has_style(TextStyle::Underline));
    assert!(fragments[0].has_style(TextStyle::Superscript));
    assert!(fragments[0].has_style(TextStyle::Italic));
    assert!(!fragments[0].has_style(TextStyle::Bold));
}

#[test]
fn test_unknown_tags_are_transparent() {
    assert_eq!(
        format("<mark>a</mark>b"),
        vec![Fragment::text("a"), Fragment::text("b")]
    );
}

#[test]
fn test_themed_formatter() {
    let theme = ThemeLoader::new()
        .with_file(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/theme.toml"))
        .build()
        .expect("fixture theme loads");
    let formatter = Formatter::new(Some(theme));
    let fragments = formatter.format(
        r#"<code>x</code> <a href="http://x">y</a>"#,
        &FormatOptions::default(),
    );
    insta::assert_snapshot!(
        to_json(&fragments),
        @r#"[{"text":"x","color":"B12146","font":"M+ 1mn","size":0.9,"character_spacing":-0.1},{"text":" "},{"text":"y","color":"428BCA","link":"http://x"}]"#
    );
}

#[test]
fn test_normalized_input() {
    let formatter = Formatter::default();
    let fragments = formatter.format("one\n  <i>two\n three</i>", &FormatOptions::normalized());
    assert_eq!(
        fragments,
        vec![
            Fragment::text("one "),
            Fragment::text("two three").with_style(TextStyle::Italic),
        ]
    );
}

#[test]
fn test_line_break_without_merging() {
    let formatter = Formatter::with_transform(Transform::default().with_merge_adjacent_text(false));
    let text: Vec<_> = formatter
        .format("a<br>b", &FormatOptions::default())
        .into_iter()
        .map(|fragment| fragment.text)
        .collect();
    assert_eq!(text, vec!["a", "\n", "b"]);
}

#[test]
fn test_fragment_listing() {
    let registry = FormatRegistry::with_defaults();
    let fragments = format(r#"a<br><b><color rgb="FF0000">b</color></b>"#);
    let output = registry.serialize(&fragments, "fragments").unwrap();
    assert_eq!(output, "\"a\\n\"\n\"b\" bold color=#FF0000\n");
}

#[test]
fn test_formatter_shared_across_threads() {
    let formatter = std::sync::Arc::new(Formatter::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let formatter = std::sync::Arc::clone(&formatter);
            std::thread::spawn(move || {
                formatter.format(&format!("<b>{i}</b>"), &FormatOptions::default())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let fragments = handle.join().expect("thread completes");
        assert_eq!(
            fragments,
            vec![Fragment::text(i.to_string()).with_style(TextStyle::Bold)]
        );
    }
}
