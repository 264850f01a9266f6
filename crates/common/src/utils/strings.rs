use crate::constants::{IDENTIFIER_REGEX, IDENTIFIER_TOKEN_REGEX};

/// Returns true if the given string is a syntactically valid C identifier:
/// it starts with a letter or underscore, continues with letters, digits, or
/// underscores, and does not start with a digit.
///
/// ```
/// use unflatten_common::utils::strings::is_valid_identifier;
///
/// assert!(is_valid_identifier("_count"));
/// assert!(!is_valid_identifier("9lives"));
/// ```
pub fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIER_REGEX.is_match(s).unwrap_or(false)
}

/// Collects every identifier-shaped token in the given string, in order of
/// appearance.
///
/// ```
/// use unflatten_common::utils::strings::identifier_tokens;
///
/// let tokens = identifier_tokens("int *ptr");
/// assert_eq!(tokens, vec!["int".to_string(), "ptr".to_string()]);
/// ```
pub fn identifier_tokens(s: &str) -> Vec<String> {
    IDENTIFIER_TOKEN_REGEX
        .find_iter(s)
        .filter_map(|m| m.ok())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns the last identifier-shaped token in the given string, if any. For
/// declarator fragments such as `int (*fp)` this yields the variable name
/// rather than a type keyword.
pub fn last_identifier(s: &str) -> Option<String> {
    identifier_tokens(s).pop()
}

/// Returns the leading identifier of the given string after stripping
/// whitespace and pointer markers, if any. Used to recover the declared name
/// from a declarator fragment such as `*ptr` or `buf[64]`.
pub fn leading_identifier(s: &str) -> Option<String> {
    let trimmed = s.trim_start_matches(|c: char| c.is_whitespace() || c == '*');
    let name: String =
        trimmed.chars().take_while(|c| c.is_ascii_alphanumeric() || *c == '_').collect();

    if is_valid_identifier(&name) {
        Some(name)
    } else {
        None
    }
}

/// Extension trait for strings that adds helpful operations.
pub trait StringExt {
    /// Truncates a string to a maximum length, adding an ellipsis if necessary.
    ///
    /// # Arguments
    ///
    /// * `max_length` - The maximum length of the returned string
    ///
    /// # Returns
    ///
    /// * `String` - The truncated string with ellipsis if needed
    fn truncate(&self, max_length: usize) -> String;
}

/// Truncates a string to a maximum length, adding an ellipsis ("...") if the string is truncated.
/// Note: the ellipsis *is* counted towards the maximum length.
///
/// ```
/// use unflatten_common::utils::strings::StringExt;
///
/// let s = "Hello, world!";
/// let result = s.to_string().truncate(11);
/// assert_eq!(result, "Hell...rld!");
/// ```
impl StringExt for String {
    fn truncate(&self, max_length: usize) -> String {
        if self.len() > max_length {
            self.chars().take(max_length - 7).collect::<String>() + "..." + &self[self.len() - 4..]
        } else {
            self.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("x"));
        assert!(is_valid_identifier("_buf"));
        assert!(is_valid_identifier("counter_2"));
        assert!(!is_valid_identifier("2fast"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("a-b"));
        assert!(!is_valid_identifier("a b"));
    }

    #[test]
    fn test_identifier_tokens() {
        assert_eq!(identifier_tokens("char buf[64]"), vec!["char", "buf"]);
        assert_eq!(identifier_tokens("(*total) = a + b;"), vec!["total", "a", "b"]);
        assert!(identifier_tokens("1 + 2").is_empty());
    }

    #[test]
    fn test_last_identifier_skips_type_keywords() {
        assert_eq!(last_identifier("int *ptr"), Some("ptr".to_string()));
        assert_eq!(last_identifier("char (*name)"), Some("name".to_string()));
        assert_eq!(last_identifier("void"), Some("void".to_string()));
        assert_eq!(last_identifier("42"), None);
    }

    #[test]
    fn test_leading_identifier() {
        assert_eq!(leading_identifier("*ptr"), Some("ptr".to_string()));
        assert_eq!(leading_identifier("  buf[64]"), Some("buf".to_string()));
        assert_eq!(leading_identifier("x = 0"), Some("x".to_string()));
        assert_eq!(leading_identifier("= 0"), None);
    }
}
