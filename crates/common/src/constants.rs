use fancy_regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    /// The following regex matches a full C identifier: a leading letter or
    /// underscore followed by letters, digits, or underscores
    pub static ref IDENTIFIER_REGEX: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("failed to compile regex");

    /// The following regex is used as a search pattern for identifier-shaped tokens
    pub static ref IDENTIFIER_TOKEN_REGEX: Regex =
        Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").expect("failed to compile regex");
}
