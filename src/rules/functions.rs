//! Function registry: the closed set of transforms callable as `name(...)`.
//!
//! Every transform is total (`&str -> String`, defined for the empty string).
//! Names outside this table are not functions; the template compiler leaves
//! such calls in place as literal text.

pub(crate) type Transform = fn(&str) -> String;

const FUNCTIONS: &[(&str, Transform)] = &[
    ("title", title),
    ("capitalize", capitalize),
    ("trim", trim),
    ("trimLeft", trim_left),
    ("trimRight", trim_right),
    ("upper", upper),
    ("lower", lower),
];

/// Words kept lowercase by `title` unless they open or close the text or
/// follow a sentence break.
const MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "from", "if", "in", "into", "nor", "of", "off", "on",
    "onto", "or", "per", "so", "than", "the", "to", "up", "upon", "via", "vs", "with", "yet",
];

/// Words `title` always writes in this casing.
const SPECIAL_WORDS: &[&str] = &[
    "API", "CI", "CLI", "CSS", "DNS", "GitHub", "GitLab", "HTML", "HTTP", "HTTPS", "iOS", "JavaScript", "JS", "JSON",
    "JSX", "macOS", "SQL", "TypeScript", "UI", "URL",
];

/// Punctuation after which `title` capitalizes even a minor word.
const SENTENCE_BREAKS: &[char] = &[':', '.', '(', '!', '?', ';'];

pub(crate) fn lookup(name: &str) -> Option<Transform> {
    FUNCTIONS.iter().find(|(registered, _)| *registered == name).map(|(_, transform)| *transform)
}

/// Names callable from a pattern, in registry order.
pub fn function_names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS.iter().map(|(name, _)| *name)
}

/// Title-case `value`: everything is lowercased, then each word (runs of word
/// characters and apostrophes, so `-` separates words) is capitalized unless
/// it is a minor word. The first and last words and any word after `:`, `.`,
/// `(`, `!`, `?` or `;` are always capitalized. Special words keep their
/// canonical casing.
fn title(value: &str) -> String {
    let lowered = value.to_lowercase();
    let words: Vec<regex::Match<'_>> = regex!(r"[\w'’]+").find_iter(&lowered).collect();
    let last = words.len().saturating_sub(1);

    let mut out = String::with_capacity(lowered.len());
    let mut cursor = 0;
    for (idx, word) in words.iter().enumerate() {
        let gap = &lowered[cursor..word.start()];
        out.push_str(gap);

        let text = word.as_str();
        let forced = idx == 0 || idx == last || gap.trim_end().ends_with(SENTENCE_BREAKS);
        if let Some(special) = SPECIAL_WORDS.iter().find(|special| special.to_lowercase() == text) {
            out.push_str(special);
        } else if !forced && MINOR_WORDS.contains(&text) {
            out.push_str(text);
        } else {
            out.push_str(&capitalize(text));
        }
        cursor = word.end();
    }
    out.push_str(&lowered[cursor..]);
    out
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn trim(value: &str) -> String {
    value.trim().to_string()
}

fn trim_left(value: &str) -> String {
    value.trim_start().to_string()
}

fn trim_right(value: &str) -> String {
    value.trim_end().to_string()
}

fn upper(value: &str) -> String {
    value.to_uppercase()
}

fn lower(value: &str) -> String {
    value.to_lowercase()
}
