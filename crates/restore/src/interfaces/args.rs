use clap::Parser;
use derive_builder::Builder;
use eyre::Result;
use unflatten_common::utils::io::file::read_file;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Restores compilable C source from flattened intermediate forms",
    override_usage = "unflatten restore <TARGET> [OPTIONS]"
)]
/// Arguments for the restore operation
///
/// This struct contains all the configuration parameters needed to restore a
/// flattened C source file into a compilable, human-readable reconstruction.
pub struct RestoreArgs {
    /// Path to the flattened C source file to restore.
    #[clap(required = true)]
    pub target: String,

    /// The output directory to write the output to or 'print' to print to the console
    #[clap(long = "output", short = 'o', default_value = "", hide_default_value = true)]
    pub output: String,

    /// The name for the output file
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub name: String,

    /// Whether to persist each restoration stage's output as a debug artifact.
    #[clap(long = "save-steps")]
    pub save_steps: bool,
}

impl RestoreArgs {
    /// Reads the flattened source text from the target path.
    ///
    /// # Returns
    /// The source text as a string
    pub fn get_source(&self) -> Result<String> {
        read_file(&self.target)
    }
}

impl RestoreArgsBuilder {
    /// Creates a new RestoreArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            output: Some(String::new()),
            name: Some(String::new()),
            save_steps: Some(false),
        }
    }
}
