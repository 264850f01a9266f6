use crate::{
    core::pipeline::RestoreState,
    utils::constants::{RESTORED_STRING_LITERAL, STR_PLACEHOLDER},
    Error,
};

/// Replaces every exact placeholder string literal with a fixed
/// representative literal. Pure, total, and idempotent: re-applying to text
/// with no remaining placeholder is a no-op.
pub(crate) fn restore_string_literals(
    source: &str,
    _state: &mut RestoreState,
) -> Result<String, Error> {
    Ok(source.replace(STR_PLACEHOLDER, RESTORED_STRING_LITERAL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_placeholder() {
        let mut state = RestoreState::default();
        let source = "printf(\"STR\");\nputs(\"STR\");";
        let restored = restore_string_literals(source, &mut state).expect("stage failed");

        assert_eq!(restored, "printf(\"restored_string\");\nputs(\"restored_string\");");
        assert!(!restored.contains("\"STR\""));
    }

    #[test]
    fn test_idempotent_on_restored_text() {
        let mut state = RestoreState::default();
        let source = "printf(\"restored_string\");";
        let restored = restore_string_literals(source, &mut state).expect("stage failed");

        assert_eq!(restored, source);
    }
}
