/// Compile a fixed pattern once and hand back the same `Regex` on every
/// later use. Patterns are literals in this crate, so failing to compile
/// one is a bug and panics.
#[macro_export]
macro_rules! compile {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
