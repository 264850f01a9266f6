use hashbrown::HashSet;
use tracing::debug;
use unflatten_common::utils::strings::last_identifier;

use crate::{core::pipeline::RestoreState, utils::constants::MAIN_HEADER_REGEX, Error};

/// Returns the set of identifiers bound as parameters by the canonical
/// function's header. For each comma-separated parameter fragment the last
/// identifier-shaped token is taken, so declarator syntax such as a
/// parenthesized pointer declarator still yields the variable name rather
/// than a type keyword. Returns an empty set when the header uses the
/// no-parameter form or is absent.
pub(crate) fn parameters_of(source: &str) -> HashSet<String> {
    let mut parameters = HashSet::new();

    if let Ok(Some(captures)) = MAIN_HEADER_REGEX.captures(source) {
        let list = captures.get(1).map(|m| m.as_str()).unwrap_or("").trim();
        if list.is_empty() || list == "void" {
            return parameters;
        }

        for fragment in list.split(',') {
            if let Some(name) = last_identifier(fragment) {
                parameters.insert(name);
            }
        }
    }

    parameters
}

/// Read-only analysis stage: derives the parameter set consumed by type
/// inference. The source text passes through unchanged.
pub(crate) fn extract_parameters(source: &str, state: &mut RestoreState) -> Result<String, Error> {
    state.parameters = parameters_of(source);
    debug!("bound {} parameter name(s) from the main header", state.parameters.len());

    Ok(source.to_string())
}
