mod args;

pub use args::{RestoreArgs, RestoreArgsBuilder};
