//! Template compiler.
//!
//! Drives the lexer over a pattern with the rules from `rules::template` and
//! turns each match into a token:
//!
//! - placeholder: the variable's value, or `""` when it is not set;
//! - registered call: the function applied to the argument, rendered
//!   recursively with calls enabled;
//! - unregistered call: the whole matched text rendered again with calls
//!   disabled, so placeholders inside still resolve but the call stays inert;
//! - literal: the character itself.
//!
//! The call mode is threaded through the recursion as [`Functions`]. Recursion
//! depth is bounded by the nesting of calls in the pattern.

use crate::api::Variables;
use crate::engine::Lexer;
use crate::rules::{functions, template};
use crate::{Range, Rule, RuleKind, Token, TokenKind};
use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Captures;

static RULES_WITH_FUNCTIONS: Lazy<Vec<Rule>> = Lazy::new(|| template::get(Functions::Enabled));
static RULES_WITHOUT_FUNCTIONS: Lazy<Vec<Rule>> = Lazy::new(|| template::get(Functions::Disabled));

/// Whether `name(...)` calls are recognized during a render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Functions {
    #[default]
    Enabled,
    Disabled,
}

/// Scan `pattern` and produce its tokens.
///
/// Never fails: if the lexer reports an error (only possible with a broken
/// rule set) the whole pattern comes back as one literal token.
pub(crate) fn compile(pattern: &str, variables: &Variables, functions: Functions) -> Vec<Token> {
    let rules: &[Rule] = match functions {
        Functions::Enabled => RULES_WITH_FUNCTIONS.as_slice(),
        Functions::Disabled => RULES_WITHOUT_FUNCTIONS.as_slice(),
    };

    match Lexer::new(pattern, rules).scan(|rule, caps, range| produce(rule, caps, range, variables)) {
        Ok(tokens) => tokens,
        Err(err) => {
            error!("rendering {pattern:?} left unrendered: {err}");
            vec![Token::new(TokenKind::Literal, pattern, Range { start: 0, end: pattern.len() })]
        }
    }
}

pub(crate) fn concatenate(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.value.as_str()).collect()
}

pub(crate) fn render(pattern: &str, variables: &Variables, functions: Functions) -> String {
    concatenate(&compile(pattern, variables, functions))
}

fn produce(rule: &Rule, caps: &Captures<'_>, range: Range, variables: &Variables) -> Token {
    match rule.kind {
        RuleKind::Placeholder => {
            let name = group(caps, 1);
            let value = variables.get(name).cloned().unwrap_or_else(|| {
                debug!("placeholder :{name} has no value, substituting an empty string");
                String::new()
            });
            Token::new(TokenKind::Placeholder, value, range)
        }
        RuleKind::FunctionCall => {
            let name = group(caps, 1);
            let value = match functions::lookup(name) {
                Some(transform) => transform(&render(group(caps, 2), variables, Functions::Enabled)),
                None => {
                    debug!("{name}(...) is not a registered function, keeping it as text");
                    render(group(caps, 0), variables, Functions::Disabled)
                }
            };
            Token::new(TokenKind::FunctionResult, value, range)
        }
        RuleKind::Literal => Token::new(TokenKind::Literal, group(caps, 0), range),
    }
}

fn group<'t>(caps: &Captures<'t>, idx: usize) -> &'t str {
    caps.get(idx).map_or("", |m| m.as_str())
}
