use tracing::debug;

use crate::{core::pipeline::RestoreState, utils::constants::DEREF_ASSIGN_REGEX, Error};

/// Policy for choosing the address-of target of a synthesized pointer
/// binding.
///
/// The default vocabulary is the pair `sum`/`product`: the first candidate
/// occurring as a substring of the triggering line is chosen, falling back
/// to the last candidate when none occurs. The vocabulary is a heuristic
/// fixture, not a derived fact, and can be overridden with a custom
/// candidate list.
#[derive(Debug, Clone)]
pub struct PointerTargetResolver {
    candidates: Vec<String>,
}

impl PointerTargetResolver {
    /// Builds a resolver over a custom candidate vocabulary.
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    /// Picks the binding target for the given dereference-assignment line.
    pub fn resolve(&self, line: &str) -> Option<&str> {
        self.candidates
            .iter()
            .find(|candidate| line.contains(candidate.as_str()))
            .or_else(|| self.candidates.last())
            .map(String::as_str)
    }
}

impl Default for PointerTargetResolver {
    fn default() -> Self {
        Self { candidates: vec!["sum".to_string(), "product".to_string()] }
    }
}

/// Splices an address-of binding statement immediately before every
/// dereference-assignment line whose pointer name has not already received a
/// binding in this run. Each pointer name receives at most one binding
/// regardless of how many qualifying lines reference it.
pub(crate) fn insert_pointer_bindings(
    source: &str,
    state: &mut RestoreState,
) -> Result<String, Error> {
    let mut restored = Vec::new();

    for line in source.lines() {
        if let Some(name) = dereference_assignment_target(line) {
            if !state.bound_pointers.contains(&name) {
                if let Some(target) = state.resolver.resolve(line) {
                    debug!("binding pointer '{name}' to target '{target}'");
                    restored.push(format!("    {name} = &{target};"));
                    state.bound_pointers.insert(name);
                }
            }
        }

        restored.push(line.to_string());
    }

    Ok(restored.join("\n"))
}

/// The pointer name of a dereference-assignment line, if the line is one.
fn dereference_assignment_target(line: &str) -> Option<String> {
    DEREF_ASSIGN_REGEX
        .captures(line)
        .ok()
        .flatten()
        .and_then(|captures| captures.get(1).map(|m| m.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binds_to_sum_when_line_mentions_sum() {
        let mut state = RestoreState::default();
        let source = "int main(void) {\n    (*p) = sum_total;\n    return 0;\n}";
        let restored = insert_pointer_bindings(source, &mut state).expect("stage failed");

        let lines: Vec<&str> = restored.lines().collect();
        assert_eq!(lines[1], "    p = &sum;");
        assert_eq!(lines[2], "    (*p) = sum_total;");
    }

    #[test]
    fn test_binds_to_product_otherwise() {
        let mut state = RestoreState::default();
        let source = "int main(void) {\n    (*p) = 5;\n    return 0;\n}";
        let restored = insert_pointer_bindings(source, &mut state).expect("stage failed");

        assert!(restored.contains("    p = &product;\n    (*p) = 5;"));
    }

    #[test]
    fn test_each_pointer_is_bound_at_most_once() {
        let mut state = RestoreState::default();
        let source = "int main(void) {\n    (*p) = 1;\n    (*p) = 2;\n    (*q) = 3;\n    return 0;\n}";
        let restored = insert_pointer_bindings(source, &mut state).expect("stage failed");

        assert_eq!(restored.matches("p = &").count(), 1);
        assert_eq!(restored.matches("q = &").count(), 1);
    }

    #[test]
    fn test_custom_vocabulary_overrides_default() {
        let mut state = RestoreState {
            resolver: PointerTargetResolver::new(vec![
                "minimum".to_string(),
                "maximum".to_string(),
            ]),
            ..Default::default()
        };

        let source = "    (*p) = minimum + 1;";
        let restored = insert_pointer_bindings(source, &mut state).expect("stage failed");

        assert!(restored.starts_with("    p = &minimum;"));
    }
}
