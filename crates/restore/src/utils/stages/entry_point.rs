use crate::{
    core::pipeline::RestoreState,
    utils::constants::{ENTRY_POINT_REGEX, MALFORMED_MAIN_REGEX, VOID_MAIN_REGEX},
    Error,
};

/// Renames every whole-word occurrence of the synthetic entry symbol to the
/// canonical function name, then repairs malformed headers:
/// - a parameter list immediately followed by a stray parenthesized fragment
///   and a brace is rewritten to a clean no-argument header
/// - a void return type on the canonical function is rewritten to int
pub(crate) fn restore_entry_point(
    source: &str,
    _state: &mut RestoreState,
) -> Result<String, Error> {
    let renamed = ENTRY_POINT_REGEX.replace_all(source, "main");
    let repaired = MALFORMED_MAIN_REGEX.replace_all(&renamed, "int main() {");
    let restored = VOID_MAIN_REGEX.replace_all(&repaired, "int main");

    Ok(restored.into_owned())
}
