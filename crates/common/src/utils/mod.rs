/// Input/output utilities for file manipulation.
pub mod io;

/// String and identifier manipulation utilities.
pub mod strings;
