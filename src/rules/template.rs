//! Lexer rules for title patterns.
//!
//! Priority order is fixed: placeholder, then function call (only when calls
//! are enabled for the scan), then the single-character literal fallback.
//!
//! The grammar is the external pattern format and must not drift:
//!
//! - placeholder: `:` followed by `[A-Za-z_]+`
//! - function call: `[A-Za-z_]+` immediately followed by `(...)`. The argument
//!   is greedy up to the last `)` on the line, so `capitalize(trim(:title))` is
//!   one call whose argument is `trim(:title)`.

use crate::template::Functions;
use crate::{Rule, RuleKind};
use regex::Regex;

/// `:name` at the cursor.
pub fn rule_placeholder() -> Rule {
    rule! {
        name: "placeholder",
        kind: RuleKind::Placeholder,
        pattern: r"^:([a-zA-Z_]+)",
        priority: 30,
    }
}

/// `name(args)` at the cursor.
pub fn rule_function_call() -> Rule {
    rule! {
        name: "function call",
        kind: RuleKind::FunctionCall,
        pattern: r"^([a-zA-Z_]+)\((.*)\)",
        priority: 20,
    }
}

/// Any single character, newlines included.
pub fn rule_literal() -> Rule {
    rule! {
        name: "literal",
        kind: RuleKind::Literal,
        pattern: r"(?s)^.",
    }
}

pub fn get(functions: Functions) -> Vec<Rule> {
    let mut rules = vec![rule_placeholder()];
    if functions == Functions::Enabled {
        rules.push(rule_function_call());
    }
    rules.push(rule_literal());
    rules
}

/// Unanchored placeholder shape, for finding placeholders anywhere in a text.
pub fn placeholder_shape() -> &'static Regex {
    regex!(r":([a-zA-Z_]+)")
}

/// Unanchored function-call shape, for finding calls anywhere in a text.
pub fn function_shape() -> &'static Regex {
    regex!(r"([a-zA-Z_]+)\((.*)\)")
}
