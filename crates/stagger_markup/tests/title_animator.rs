//! Behavior of the title animator over whole fragments
//!
//! These tests verify that:
//! - Source tags survive unchanged and in order
//! - Every visible character is wrapped exactly once, whitespace is not
//! - Delays start at 0.05s and grow by exactly 0.05s per glyph
//! - Container nesting is tracked with a stack, not a toggle

use pretty_assertions::assert_eq;
use stagger_markup::{is_title_whitespace, Scanner, TagInfo, Token, TitleAnimator};

const WORD_OPEN: &str = r#"<span style="display:inline-block;">"#;

/// Drop every span tag, leaving source tags and text. Only valid for inputs
/// that contain no spans of their own.
fn strip_spans(markup: &str) -> String {
    Scanner::new(markup)
        .filter(|token| match token {
            Token::Tag(raw) => !TagInfo::parse(raw).is_named("span"),
            _ => true,
        })
        .map(|token| token.as_str())
        .collect()
}

fn delays(markup: &str) -> Vec<f64> {
    markup
        .split("animation-delay:")
        .skip(1)
        .map(|rest| {
            let end = rest.find('s').unwrap();
            rest[..end].parse().unwrap()
        })
        .collect()
}

/// Which glyphs sit directly in a word span, in order
fn word_wrapped(markup: &str) -> Vec<(char, bool)> {
    let mut out = Vec::new();
    let mut in_word = false;
    let mut in_glyph = false;
    for token in Scanner::new(markup) {
        match token {
            Token::Tag(WORD_OPEN) => in_word = true,
            Token::Tag(raw) if raw.starts_with("<span style=\"animation-delay") => in_glyph = true,
            Token::Tag("</span>") if in_glyph => in_glyph = false,
            Token::Tag("</span>") => in_word = false,
            Token::Text(text) if in_glyph => {
                out.extend(text.chars().map(|c| (c, in_word)));
            }
            _ => {}
        }
    }
    out
}

const SAMPLES: &[&str] = &[
    "Hi there",
    "<div>Go</div>",
    "<div>A<div>B</div>C</div>",
    "  Leading and trailing  ",
    "Build <strong>better</strong>\n<br>\tbusiness <em>with <div>us</div></em>",
    "<h2 class=\"t\" data-x='y'>Unicode: naïve 日本 😀</h2>",
    "<!-- comment --><div>\n  Manual <div>line</div>\n</div> tail",
];

#[test]
fn test_source_tags_and_text_survive() {
    let animator = TitleAnimator::default();
    for input in SAMPLES {
        let out = animator.animate(input);
        assert_eq!(strip_spans(&out), *input, "input: {input:?}");
    }
}

#[test]
fn test_glyph_count_matches_visible_characters() {
    let animator = TitleAnimator::default();
    for input in SAMPLES {
        let visible: usize = Scanner::new(input)
            .filter_map(|token| match token {
                Token::Text(text) => Some(text.chars().filter(|c| !is_title_whitespace(*c)).count()),
                _ => None,
            })
            .sum();
        let result = animator.animate_detailed(input);
        assert_eq!(result.glyphs, visible, "input: {input:?}");
        assert_eq!(delays(&result.markup).len(), visible, "input: {input:?}");
    }
}

#[test]
fn test_delays_increase_by_step() {
    let animator = TitleAnimator::default();
    for input in SAMPLES {
        let values = delays(&animator.animate(input));
        if let Some(first) = values.first() {
            assert_eq!(*first, 0.05);
        }
        for pair in values.windows(2) {
            assert!(
                (pair[1] - pair[0] - 0.05).abs() < 1e-9,
                "input: {input:?}, delays: {values:?}"
            );
        }
    }
}

#[test]
fn test_hi_there() {
    let result = TitleAnimator::default().animate_detailed("Hi there");
    assert_eq!(result.words, 2);
    assert_eq!(result.markup.matches(WORD_OPEN).count(), 2);
    assert_eq!(delays(&result.markup), vec![0.05, 0.10, 0.15, 0.20, 0.25, 0.30, 0.35]);
    assert!(result.markup.contains("</span></span> <span"));
}

#[test]
fn test_container_suppresses_word_wrapper() {
    let out = TitleAnimator::default().animate("Out <div>In</div> out");
    assert_eq!(
        word_wrapped(&out),
        vec![
            ('O', true),
            ('u', true),
            ('t', true),
            ('I', false),
            ('n', false),
            ('o', true),
            ('u', true),
            ('t', true),
        ]
    );
}

#[test]
fn test_nested_containers_use_a_stack() {
    let out = TitleAnimator::default().animate("<div>A<div>B</div>C</div>D");
    assert_eq!(
        word_wrapped(&out),
        vec![('A', false), ('B', false), ('C', false), ('D', true)]
    );
}

#[test]
fn test_container_match_is_case_insensitive() {
    let out = TitleAnimator::default().animate("<DIV>x</Div>y");
    assert_eq!(word_wrapped(&out), vec![('x', false), ('y', true)]);
}

#[test]
fn test_self_closing_container_opens_a_container() {
    // name-based detection: `<div/>` never closes, so the rest stays manual
    let out = TitleAnimator::default().animate("a<div/>b");
    assert_eq!(word_wrapped(&out), vec![('a', true), ('b', false)]);
}

#[test]
fn test_stray_brackets_never_lose_input() {
    let animator = TitleAnimator::default();
    for input in ["a < b", "<<<", "x<y", "<div", "a>b<c>d"] {
        let out = animator.animate(input);
        assert_eq!(strip_spans(&out), input, "input: {input:?}");
    }
}
