#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        kind: $kind:expr,
        pattern: $pat:literal
        $(, priority: $priority:expr)?
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            kind: $kind,
            pattern: $crate::regex!($pat),
            priority: { 0 $(+ $priority)? },
        }
    }};
}
