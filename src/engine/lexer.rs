//! The scan loop.
//!
//! ```text
//! cursor = 0
//! while cursor < len:
//!     rest = input[cursor..]
//!     rule = first rule (by priority) whose pattern matches at rest[0]
//!     token = produce(rule, captures, cursor..cursor + len(match))
//!     cursor += max(len(match), 1 char)
//! ```

use super::error::LexError;
use crate::{Range, Rule, Token};
use log::trace;
use regex::Captures;
use std::cmp::Reverse;

/// Scans `input` with a fixed, priority-ordered rule set.
///
/// Usage: `Lexer::new(input, &rules).scan(|rule, caps, range| ...)`.
#[derive(Debug)]
pub(crate) struct Lexer<'a> {
    /// Input text to scan.
    input: &'a str,
    /// Rules sorted by descending priority. Ties keep their declaration order.
    rules: Vec<&'a Rule>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, rules: &'a [Rule]) -> Self {
        let mut rules: Vec<&'a Rule> = rules.iter().collect();
        rules.sort_by_key(|rule| Reverse(rule.priority));
        Lexer { input, rules }
    }

    /// Names of the rules in the order they are tried.
    #[cfg(test)]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }

    /// Consume the whole input, producing one token per match.
    ///
    /// `produce` receives the winning rule, its captures (group 0 is the whole
    /// match, always starting at the cursor) and the byte range of the match in
    /// the input.
    pub fn scan<F>(&self, mut produce: F) -> Result<Vec<Token>, LexError>
    where
        F: FnMut(&Rule, &Captures<'a>, Range) -> Token,
    {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        while cursor < self.input.len() {
            let rest = &self.input[cursor..];
            let (rule, caps) = self.match_at(rest).ok_or_else(|| LexError::NoRuleMatched {
                position: cursor,
                snippet: rest.chars().take(16).collect(),
            })?;

            let matched = caps.get(0).map_or(0, |m| m.end());
            // An empty match would stall the cursor; step over one char instead.
            let advance = if matched > 0 { matched } else { rest.chars().next().map_or(1, char::len_utf8) };
            let range = Range { start: cursor, end: cursor + advance };

            trace!(target: "prtime::engine", "{} matched {:?} at {}..{}", rule.name, &rest[..advance], range.start, range.end);

            tokens.push(produce(rule, &caps, range));
            cursor += advance;
        }

        Ok(tokens)
    }

    fn match_at(&self, rest: &'a str) -> Option<(&'a Rule, Captures<'a>)> {
        self.rules.iter().find_map(|rule| {
            let caps = rule.pattern.captures(rest)?;
            let starts_at_cursor = caps.get(0).is_some_and(|m| m.start() == 0);
            starts_at_cursor.then_some((*rule, caps))
        })
    }
}
