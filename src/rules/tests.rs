use crate::engine::Lexer;
use crate::rules::{functions, template};
use crate::template::Functions;
use crate::{RuleKind, Token, TokenKind};

fn apply(name: &str, value: &str) -> String {
    let transform = functions::lookup(name).unwrap_or_else(|| panic!("{name} is not registered"));
    transform(value)
}

/// Kinds of the rules that won at each cursor position.
fn winning_rules(input: &str, functions: Functions) -> Vec<(RuleKind, &str)> {
    let rules = template::get(functions);
    let mut wins = Vec::new();
    Lexer::new(input, &rules)
        .scan(|rule, caps, range| {
            wins.push((rule.kind, &input[range.start..range.end]));
            Token::new(TokenKind::Literal, &caps[0], range)
        })
        .unwrap();
    wins
}

#[test]
fn registry_is_closed() {
    let names: Vec<&str> = functions::function_names().collect();
    assert_eq!(names, vec!["title", "capitalize", "trim", "trimLeft", "trimRight", "upper", "lower"]);

    for unknown in ["invalid", "Trim", "trim_left", "", "replace"] {
        assert!(functions::lookup(unknown).is_none(), "{unknown:?} should not be registered");
    }
}

#[test]
fn function_examples() {
    // (function, input, expected)
    let cases: Vec<(&str, &str, &str)> = vec![
        ("title", "this is a very cool title and too long perhaps", "This Is a Very Cool Title and Too Long Perhaps"),
        ("title", "the end of the road", "The End of the Road"),
        ("title", "what it is for", "What It Is For"),
        ("title", "  spaced   out  ", "  Spaced   Out  "),
        ("title", "keep GitHub casing", "Keep GitHub Casing"),
        ("title", "a", "A"),
        ("title", "fix API well-known bug: the end", "Fix API Well-Known Bug: The End"),
        ("title", "SHOUTING TITLE", "Shouting Title"),
        ("title", "state-of-the-art design", "State-of-the-Art Design"),
        ("title", "fix (the) thing. the rest", "Fix (The) Thing. The Rest"),
        ("title", "don't stop", "Don't Stop"),
        ("capitalize", "fix super important bug", "Fix super important bug"),
        ("capitalize", "écrire", "Écrire"),
        ("capitalize", " leading space", " leading space"),
        ("trim", " title ", "title"),
        ("trim", "\t title\n", "title"),
        ("trimLeft", " title ", "title "),
        ("trimRight", " title ", " title"),
        ("upper", "Mixed Case", "MIXED CASE"),
        ("lower", "Mixed Case", "mixed case"),
    ];

    for (name, input, expected) in cases {
        assert_eq!(apply(name, input), expected, "{name}({input:?})");
    }
}

#[test]
fn functions_are_total_on_empty_input() {
    for name in functions::function_names() {
        assert_eq!(apply(name, ""), "", "{name}(\"\")");
    }
}

#[test]
fn rule_set_order_depends_on_mode() {
    let enabled: Vec<RuleKind> = template::get(Functions::Enabled).iter().map(|r| r.kind).collect();
    let disabled: Vec<RuleKind> = template::get(Functions::Disabled).iter().map(|r| r.kind).collect();

    assert_eq!(enabled, vec![RuleKind::Placeholder, RuleKind::FunctionCall, RuleKind::Literal]);
    assert_eq!(disabled, vec![RuleKind::Placeholder, RuleKind::Literal]);
}

#[test]
fn placeholder_names_are_letters_and_underscores() {
    let wins = winning_rules(":pr_title1", Functions::Enabled);
    assert_eq!(wins[0], (RuleKind::Placeholder, ":pr_title"));
    assert_eq!(wins[1], (RuleKind::Literal, "1"));

    // A lone colon is just text.
    assert_eq!(winning_rules(": x", Functions::Enabled)[0], (RuleKind::Literal, ":"));
}

#[test]
fn function_call_argument_runs_to_the_last_paren() {
    let wins = winning_rules("capitalize(trim(:title)) (done)", Functions::Enabled);
    assert_eq!(wins, vec![(RuleKind::FunctionCall, "capitalize(trim(:title)) (done)")]);

    let wins = winning_rules("upper(:a) x", Functions::Enabled);
    assert_eq!(wins[0], (RuleKind::FunctionCall, "upper(:a)"));
}

#[test]
fn function_call_stops_at_end_of_line() {
    let wins = winning_rules("upper(:a\n)", Functions::Enabled);
    assert_eq!(wins[0].0, RuleKind::Literal);
    assert!(wins.iter().all(|(kind, _)| *kind != RuleKind::FunctionCall));
}

#[test]
fn disabled_mode_never_produces_calls() {
    let wins = winning_rules("upper(:a)", Functions::Disabled);
    let kinds: Vec<RuleKind> = wins.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        kinds,
        vec![
            RuleKind::Literal,
            RuleKind::Literal,
            RuleKind::Literal,
            RuleKind::Literal,
            RuleKind::Literal,
            RuleKind::Literal,
            RuleKind::Placeholder,
            RuleKind::Literal,
        ]
    );
}

#[test]
fn placeholder_wins_over_call_at_the_same_position() {
    let wins = winning_rules(":a(b)", Functions::Enabled);
    assert_eq!(wins[0], (RuleKind::Placeholder, ":a"));
    assert_eq!(wins[1], (RuleKind::Literal, "("));
}

#[test]
fn literal_rule_covers_newlines() {
    let wins = winning_rules("a\nb", Functions::Disabled);
    assert_eq!(wins.len(), 3);
    assert_eq!(wins[1], (RuleKind::Literal, "\n"));
}

#[test]
fn shapes_are_unanchored() {
    assert_eq!(template::placeholder_shape().find("see :title").map(|m| m.as_str()), Some(":title"));
    assert_eq!(template::function_shape().find("x = upper(:a)").map(|m| m.as_str()), Some("upper(:a)"));
}
