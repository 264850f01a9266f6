use tracing::debug;

use crate::{core::pipeline::RestoreState, utils::constants::MAIN_OPEN_REGEX, Error};

/// Splices a declaration statement for every inferred identifier immediately
/// after the first line matching the canonical function's opening
/// signature-and-brace form, in first-encounter order. Insertion happens
/// exactly once even if multiple matching lines exist; if no matching line
/// is found the text is returned unchanged.
pub(crate) fn insert_declarations(source: &str, state: &mut RestoreState) -> Result<String, Error> {
    let mut restored = Vec::new();

    for line in source.lines() {
        restored.push(line.to_string());

        if !state.declarations_inserted && MAIN_OPEN_REGEX.is_match(line).unwrap_or(false) {
            for (name, annotation) in state.context.inferred_entries() {
                debug!("declaring inferred identifier '{name}' as '{annotation}'");
                restored.push(annotation.render_declaration(name));
            }
            state.declarations_inserted = true;
        }
    }

    Ok(restored.join("\n"))
}
