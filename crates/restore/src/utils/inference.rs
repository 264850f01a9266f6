use std::fmt::{self, Display};

use hashbrown::HashSet;
use unflatten_common::utils::strings::{is_valid_identifier, leading_identifier};

use crate::utils::constants::{
    DECLARATION_REGEX, DEREF_USAGE_REGEX, INDEX_USAGE_REGEX, SCALAR_USAGE_REGEX,
};

/// A type annotation synthesized for an inferred-undeclared identifier.
///
/// Float, double, long, and short are recognized only when matching an
/// explicit existing declaration, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeAnnotation {
    /// A scalar integer, default-initialized to zero.
    Int,
    /// A pointer to an integer, declared without an initializer.
    IntPointer,
    /// A pointer to a character buffer, declared without an initializer.
    CharPointer,
}

impl TypeAnnotation {
    /// Renders a declaration statement for the given identifier. Pointer
    /// annotations are emitted bare; scalar annotations carry an explicit
    /// zero initializer.
    pub(crate) fn render_declaration(&self, name: &str) -> String {
        match self {
            TypeAnnotation::Int => format!("    int {name} = 0;"),
            TypeAnnotation::IntPointer => format!("    int *{name};"),
            TypeAnnotation::CharPointer => format!("    char *{name};"),
        }
    }
}

impl Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeAnnotation::Int => write!(f, "int"),
            TypeAnnotation::IntPointer => write!(f, "int *"),
            TypeAnnotation::CharPointer => write!(f, "char *"),
        }
    }
}

/// Local state accumulated while scanning a body for inference evidence.
/// Built fresh for every pipeline run, so runs are independently
/// reproducible.
#[derive(Debug, Default)]
pub(crate) struct InferenceContext {
    /// Names with an explicit type declaration somewhere in the body.
    declared: HashSet<String>,
    /// Inferred identifiers with their synthesized types, in first-encounter
    /// order. This order determines declaration emission order.
    inferred: Vec<(String, TypeAnnotation)>,
    /// Membership index over `inferred`.
    inferred_names: HashSet<String>,
}

impl InferenceContext {
    /// Returns true if the given name has an explicit declaration.
    pub(crate) fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Records an explicitly declared name, permanently excluding it from
    /// inference.
    pub(crate) fn add_declared(&mut self, name: String) {
        self.declared.insert(name);
    }

    /// Assigns a type to an identifier unless it already has one. The first
    /// classification wins; later evidence for the same identifier is
    /// ignored.
    pub(crate) fn classify(&mut self, name: &str, annotation: TypeAnnotation) {
        if self.inferred_names.contains(name) {
            return;
        }

        self.inferred_names.insert(name.to_string());
        self.inferred.push((name.to_string(), annotation));
    }

    /// The inferred identifiers and their types, in first-encounter order.
    pub(crate) fn inferred_entries(&self) -> &[(String, TypeAnnotation)] {
        &self.inferred
    }
}

/// Records every name declared on the given line, if it is an explicit
/// type-keyword declaration. A leading pointer marker is stripped from each
/// declarator.
pub(crate) fn scan_declared_names(line: &str, context: &mut InferenceContext) {
    if let Ok(Some(captures)) = DECLARATION_REGEX.captures(line) {
        let declarators = captures.get(1).map(|m| m.as_str()).unwrap_or("");
        for fragment in declarators.split(',') {
            if let Some(name) = leading_identifier(fragment) {
                context.add_declared(name);
            }
        }
    }
}

/// Identifiers on the given line immediately followed by a bracketed
/// subscript. Array-like usage implies a string buffer.
pub(crate) fn index_usage_candidates(line: &str) -> Vec<String> {
    capture_all(&INDEX_USAGE_REGEX, line)
}

/// Identifiers on the given line appearing inside a parenthesized
/// dereference form.
pub(crate) fn dereference_candidates(line: &str) -> Vec<String> {
    capture_all(&DEREF_USAGE_REGEX, line)
}

/// Identifiers on the given line immediately followed by an increment,
/// decrement, or assignment operator.
pub(crate) fn scalar_usage_candidates(line: &str) -> Vec<String> {
    capture_all(&SCALAR_USAGE_REGEX, line)
}

/// Applies the evidence rules to a single line, in fixed precedence order:
/// index usage, then dereference, then scalar usage. An identifier is only
/// eligible if it is a valid identifier and is neither a parameter nor
/// already declared.
pub(crate) fn infer_line(line: &str, parameters: &HashSet<String>, context: &mut InferenceContext) {
    for candidate in index_usage_candidates(line) {
        if eligible(&candidate, parameters, context) {
            context.classify(&candidate, TypeAnnotation::CharPointer);
        }
    }

    for candidate in dereference_candidates(line) {
        if eligible(&candidate, parameters, context) {
            context.classify(&candidate, TypeAnnotation::IntPointer);
        }
    }

    for candidate in scalar_usage_candidates(line) {
        if eligible(&candidate, parameters, context) {
            context.classify(&candidate, TypeAnnotation::Int);
        }
    }
}

fn eligible(name: &str, parameters: &HashSet<String>, context: &InferenceContext) -> bool {
    is_valid_identifier(name) && !parameters.contains(name) && !context.is_declared(name)
}

fn capture_all(regex: &fancy_regex::Regex, line: &str) -> Vec<String> {
    regex
        .captures_iter(line)
        .filter_map(|captures| captures.ok())
        .filter_map(|captures| captures.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
