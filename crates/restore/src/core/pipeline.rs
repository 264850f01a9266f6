use std::time::Instant;

use hashbrown::HashSet;
use tracing::debug;

use crate::{
    core::RestoreStep,
    utils::{
        inference::InferenceContext,
        stages::{
            ensure_headers, extract_parameters, infer_types, insert_declarations,
            insert_io_stubs, insert_pointer_bindings, restore_entry_point,
            restore_string_literals, PointerTargetResolver, Stage,
        },
    },
    Error,
};

/// State threaded through a single pipeline run. Built fresh per run so that
/// no state carries over between invocations.
#[derive(Debug, Default)]
pub(crate) struct RestoreState {
    /// Identifiers bound by the canonical function's parameter list.
    pub(crate) parameters: HashSet<String>,
    /// Declared-name and inferred-type accumulation for this run.
    pub(crate) context: InferenceContext,
    /// Guards the declaration splice so it happens at most once.
    pub(crate) declarations_inserted: bool,
    /// Pointer names that have already received an address-of binding.
    pub(crate) bound_pointers: HashSet<String>,
    /// Policy choosing the target of synthesized pointer bindings.
    pub(crate) resolver: PointerTargetResolver,
}

impl RestoreState {
    fn new(resolver: PointerTargetResolver) -> Self {
        Self { resolver, ..Default::default() }
    }
}

/// The [`RestorePipeline`] manages the ordered sequence of whole-file text
/// transformations that turn a flattened source into its restored form.
///
/// Stages run exactly once per invocation, in fixed order, and each stage's
/// output is the next stage's input. Stages 3 and 4 are read-only analyses
/// feeding the declaration splice in stage 5.
pub(crate) struct RestorePipeline {
    /// The registered stages, in execution order.
    stages: Vec<Stage>,
    /// The state shared between stages for this run.
    state: RestoreState,
}

impl RestorePipeline {
    /// Build a new pipeline with the given pointer-target resolver.
    pub(crate) fn new(resolver: PointerTargetResolver) -> Result<Self, Error> {
        let mut pipeline = Self { stages: Vec::new(), state: RestoreState::new(resolver) };
        pipeline.register_stages()?;
        Ok(pipeline)
    }

    /// Register the restoration stages in their fixed execution order.
    fn register_stages(&mut self) -> Result<(), Error> {
        self.stages.push(Stage::new("restored_main", restore_entry_point));
        self.stages.push(Stage::new("restored_strings", restore_string_literals));
        self.stages.push(Stage::new("parameters", extract_parameters));
        self.stages.push(Stage::new("type_inference", infer_types));
        self.stages.push(Stage::new("declarations", insert_declarations));
        self.stages.push(Stage::new("pointer_bindings", insert_pointer_bindings));
        self.stages.push(Stage::new("dummy_io", insert_io_stubs));
        self.stages.push(Stage::new("headers", ensure_headers));

        Ok(())
    }

    /// Runs every stage in sequence over the given source, returning the
    /// final text along with each stage's labeled output.
    pub(crate) fn run(&mut self, source: &str) -> Result<(String, Vec<RestoreStep>), Error> {
        let mut current = source.to_string();
        let mut steps = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let start_stage_time = Instant::now();
            current = stage.run(&current, &mut self.state)?;
            debug!("stage '{}' completed in {:?}", stage.label(), start_stage_time.elapsed());

            steps.push(RestoreStep { label: stage.label().to_string(), source: current.clone() });
        }

        Ok((current, steps))
    }
}
