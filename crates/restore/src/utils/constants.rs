use fancy_regex::Regex;
use lazy_static::lazy_static;

/// The opaque string-literal placeholder emitted by the upstream flattening step
pub(crate) const STR_PLACEHOLDER: &str = "\"STR\"";

/// The representative literal substituted for every string placeholder
pub(crate) const RESTORED_STRING_LITERAL: &str = "\"restored_string\"";

/// The synthesized read statement anchored to the placeholder scalar
pub(crate) const SCANF_STUB: &str = "    scanf(\"%d\", &var);";

/// The synthesized echo statement anchored to the placeholder scalar
pub(crate) const PRINTF_STUB: &str = "    printf(\"value = %d\\n\", var);";

/// The placeholder scalar declaration synthesized on the fallback path
pub(crate) const PLACEHOLDER_DECL: &str = "    int var;";

/// The standard I/O include directive prepended when no include is present
pub(crate) const STDIO_INCLUDE: &str = "#include <stdio.h>";

lazy_static! {
    /// The following regex matches whole-word occurrences of the synthetic
    /// entry symbol
    pub(crate) static ref ENTRY_POINT_REGEX: Regex =
        Regex::new(r"\bentry_point\b").expect("failed to compile regex");

    /// The following regex matches a malformed main header in which the
    /// parameter list is immediately followed by a stray parenthesized
    /// fragment and a brace, a known artifact of the upstream flattening step
    pub(crate) static ref MALFORMED_MAIN_REGEX: Regex =
        Regex::new(r"(?:\b(?:void|int)\s+)?\bmain\s*\([^)]*\)\s*\([^)]*\)\s*\{")
            .expect("failed to compile regex");

    /// The following regex matches a main header that still carries a void
    /// return type after entry-point renaming
    pub(crate) static ref VOID_MAIN_REGEX: Regex =
        Regex::new(r"\bvoid\s+main\b").expect("failed to compile regex");

    /// The following regex captures the parameter list of the main header,
    /// tolerating one level of nested parentheses so a parenthesized pointer
    /// declarator does not truncate the list
    pub(crate) static ref MAIN_HEADER_REGEX: Regex =
        Regex::new(r"\bmain\s*\(((?:[^()]|\([^()]*\))*)\)").expect("failed to compile regex");

    /// The following regex matches the opening signature-and-brace form of
    /// the main function on a single line, tolerating one level of nested
    /// parentheses in the parameter list
    pub(crate) static ref MAIN_OPEN_REGEX: Regex =
        Regex::new(r"\bmain\s*\((?:[^()]|\([^()]*\))*\)\s*\{").expect("failed to compile regex");

    /// The following regex matches an explicit type-keyword declaration and
    /// captures its declarator list
    pub(crate) static ref DECLARATION_REGEX: Regex =
        Regex::new(r"^\s*(?:unsigned\s+|signed\s+)?(?:int|char|float|double|long|short)\b\s*(.*?);")
            .expect("failed to compile regex");

    /// The following regex captures an identifier immediately followed by a
    /// bracketed subscript
    pub(crate) static ref INDEX_USAGE_REGEX: Regex =
        Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*\[").expect("failed to compile regex");

    /// The following regex captures an identifier inside a parenthesized
    /// dereference form
    pub(crate) static ref DEREF_USAGE_REGEX: Regex =
        Regex::new(r"\(\s*\*\s*([A-Za-z_][A-Za-z0-9_]*)\s*\)").expect("failed to compile regex");

    /// The following regex captures an identifier immediately followed by an
    /// increment, decrement, or (possibly compound) assignment operator. The
    /// lookahead rejects equality comparisons.
    pub(crate) static ref SCALAR_USAGE_REGEX: Regex =
        Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*(?:\+\+|--|[+\-*/%]?=(?!=))")
            .expect("failed to compile regex");

    /// The following regex matches a dereference-assignment line and captures
    /// the pointer name
    pub(crate) static ref DEREF_ASSIGN_REGEX: Regex =
        Regex::new(r"^\s*\(\s*\*\s*([A-Za-z_][A-Za-z0-9_]*)\s*\)\s*=").expect("failed to compile regex");

    /// The following regex matches the placeholder scalar declaration
    pub(crate) static ref PLACEHOLDER_DECL_REGEX: Regex =
        Regex::new(r"\bint\s+var\s*;").expect("failed to compile regex");

    /// The following regex matches a zero-return statement
    pub(crate) static ref RETURN_ZERO_REGEX: Regex =
        Regex::new(r"^\s*return\s+0\s*;").expect("failed to compile regex");

    /// The following regex matches a preprocessor include directive
    pub(crate) static ref INCLUDE_REGEX: Regex =
        Regex::new(r"^\s*#\s*include").expect("failed to compile regex");
}
