//! The Restore module provides functionality to reconstruct compilable,
//! human-readable C source from the flattened intermediate form produced by
//! an upstream preprocessing or hardware-synthesis toolchain.
//!
//! The flattened form has lost its canonical entry-point name, its original
//! string literal contents, its local variable declarations, its
//! pointer-to-target bindings, and any interactive I/O. This module runs an
//! ordered sequence of whole-file text transformations, anchored by a
//! heuristic type-inference engine, to produce a best-effort, self-consistent
//! reconstruction.

/// Error types for the restore module
mod error;

mod core;
mod interfaces;
mod utils;

// re-export the public interface
pub use crate::core::{
    restore, restore_source, restore_source_with_resolver, RestoreResult, RestoreStep,
};
pub use error::Error;
pub use interfaces::{RestoreArgs, RestoreArgsBuilder};
pub use utils::stages::PointerTargetResolver;
