use prtime::{RenderResult, TokenKind, TokenSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

/// Print the token trace of a render.
pub fn print_render(result: &RenderResult, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Rendering: {:?}", result.pattern), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    if result.tokens.is_empty() {
        println!("{}", palette.dim("  Empty pattern"));
    }
    for (idx, token) in merge_literals(&result.tokens).iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{idx}]"), ansi::GRAY), fmt_token(token, &palette));
    }

    println!("\n{}", palette.paint("━━━ Output ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(format!("{:?}", result.output), ansi::GREEN)));
    println!();
}

/// Runs of literal characters read better as one entry.
fn merge_literals(tokens: &[TokenSummary]) -> Vec<TokenSummary> {
    let mut merged: Vec<TokenSummary> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match merged.last_mut() {
            Some(last) if last.kind == TokenKind::Literal && token.kind == TokenKind::Literal && last.end == token.start => {
                last.end = token.end;
                last.source.push_str(&token.source);
                last.value.push_str(&token.value);
            }
            _ => merged.push(token.clone()),
        }
    }
    merged
}

fn fmt_token(token: &TokenSummary, palette: &ansi::Palette) -> String {
    let (label, color) = match token.kind {
        TokenKind::Placeholder => ("placeholder", ansi::BLUE),
        TokenKind::FunctionResult => ("function", ansi::CYAN),
        TokenKind::Literal => ("literal", ansi::GRAY),
    };
    format!(
        "{} {} {} {} {}",
        palette.paint(format!("{}..{}", token.start, token.end), ansi::YELLOW),
        palette.paint(format!("{label:<11}"), color),
        palette.dim(format!("{:?}", token.source)),
        palette.dim("→"),
        palette.paint(format!("{:?}", token.value), ansi::GREEN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use prtime::{render_verbose, vars};

    #[test]
    fn literal_runs_are_merged() {
        let result = render_verbose("a :x bc", &vars([("x", "1")]));
        let merged = merge_literals(&result.tokens);

        let sources: Vec<&str> = merged.iter().map(|token| token.source.as_str()).collect();
        assert_eq!(sources, vec!["a ", ":x", " bc"]);
        assert_eq!(merged[2].start, 4);
        assert_eq!(merged[2].end, 7);
    }

    #[test]
    fn plain_palette_has_no_escapes() {
        let palette = ansi::Palette::new(false);
        let line = fmt_token(&render_verbose("upper(:x)", &vars([("x", "a")])).tokens[0], &palette);
        assert!(!line.contains('\x1b'));
        assert!(line.contains("function"));
        assert!(line.contains("\"A\""));
    }
}
