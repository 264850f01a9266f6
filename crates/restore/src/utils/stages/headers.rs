use crate::{
    core::pipeline::RestoreState,
    utils::constants::{INCLUDE_REGEX, STDIO_INCLUDE},
    Error,
};

/// Guarantees a standard I/O declaration is available: if the text contains
/// no preprocessor include directive anywhere, the standard I/O include is
/// prepended as the first line. Total and idempotent.
pub(crate) fn ensure_headers(source: &str, _state: &mut RestoreState) -> Result<String, Error> {
    let has_include =
        source.lines().any(|line| INCLUDE_REGEX.is_match(line).unwrap_or(false));

    if has_include {
        return Ok(source.to_string());
    }

    Ok(format!("{STDIO_INCLUDE}\n{source}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepends_include_when_absent() {
        let mut state = RestoreState::default();
        let source = "int main(void) {\n    return 0;\n}";
        let restored = ensure_headers(source, &mut state).expect("stage failed");

        assert!(restored.starts_with("#include <stdio.h>\n"));
    }

    #[test]
    fn test_existing_include_is_preserved() {
        let mut state = RestoreState::default();
        let source = "#include <string.h>\nint main(void) {\n    return 0;\n}";
        let restored = ensure_headers(source, &mut state).expect("stage failed");

        assert_eq!(restored, source);
    }

    #[test]
    fn test_idempotent() {
        let mut state = RestoreState::default();
        let source = "int main(void) {\n    return 0;\n}";
        let once = ensure_headers(source, &mut state).expect("stage failed");
        let twice = ensure_headers(&once, &mut state).expect("stage failed");

        assert_eq!(once, twice);
    }
}
