use crate::{core::pipeline::RestoreState, Error};

// import stages
mod declarations;
mod entry_point;
mod headers;
mod io_stubs;
mod literals;
mod parameters;
mod pointers;
mod type_inference;

// re-export stages
pub(crate) use declarations::insert_declarations;
pub(crate) use entry_point::restore_entry_point;
pub(crate) use headers::ensure_headers;
pub(crate) use io_stubs::insert_io_stubs;
pub(crate) use literals::restore_string_literals;
pub(crate) use parameters::{extract_parameters, parameters_of};
pub(crate) use pointers::insert_pointer_bindings;
pub(crate) use type_inference::infer_types;

pub use pointers::PointerTargetResolver;

/// A stage is a whole-file text transformation that takes the current source
/// and the run state, and produces the next source. Stages never mutate in
/// place; a text lacking a stage's pattern is returned unchanged.
pub(crate) struct Stage {
    label: &'static str,
    implementation: fn(&str, &mut RestoreState) -> Result<String, Error>,
}

impl Stage {
    pub(crate) fn new(
        label: &'static str,
        implementation: fn(&str, &mut RestoreState) -> Result<String, Error>,
    ) -> Self {
        Self { label, implementation }
    }

    /// A stable label for the stage, used for debug-artifact filenames.
    pub(crate) fn label(&self) -> &'static str {
        self.label
    }

    /// Run the stage implementation on the given source
    pub(crate) fn run(&self, source: &str, state: &mut RestoreState) -> Result<String, Error> {
        (self.implementation)(source, state)
    }
}
