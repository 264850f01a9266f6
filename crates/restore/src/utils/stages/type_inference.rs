use tracing::debug;

use crate::{
    core::pipeline::RestoreState,
    utils::inference::{infer_line, scan_declared_names},
    Error,
};

/// Read-only analysis stage: scans the body and populates the inference
/// context with a synthesized type for every identifier that is used but
/// never declared. The source text passes through unchanged.
///
/// Declared names are collected in a first pass over the whole body so that
/// a declaration below a usage still excludes the name from inference; the
/// evidence pass itself is a single pass in line order, and the first
/// classification of an identifier wins.
pub(crate) fn infer_types(source: &str, state: &mut RestoreState) -> Result<String, Error> {
    for line in source.lines() {
        scan_declared_names(line, &mut state.context);
    }

    for line in source.lines() {
        infer_line(line, &state.parameters, &mut state.context);
    }

    debug!(
        "inferred types for {} undeclared identifier(s)",
        state.context.inferred_entries().len()
    );

    Ok(source.to_string())
}
