pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use error::Error;
use log_args::LogArgs;
use output::{build_output_path, print_with_less};

use clap::{Parser, Subcommand};

use unflatten_common::utils::io::file::write_file;
use unflatten_config::{config, ConfigArgs, Configuration};
use unflatten_restore::{restore, RestoreArgs};

#[derive(Debug, Parser)]
#[clap(name = "unflatten", version)]
pub struct Arguments {
    #[clap(subcommand)]
    pub sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "Unflatten is a toolkit for reconstructing compilable C source from flattened, obfuscated program text."
)]
#[allow(clippy::large_enum_variant)]
pub enum Subcommands {
    #[clap(name = "restore", about = "Restore compilable C source from a flattened source file")]
    Restore(RestoreArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    let _ = args.logs.init_tracing();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    match args.sub {
        Subcommands::Restore(mut cmd) => {
            // if the user has not specified an output directory, use the default
            if cmd.output.as_str() == "" {
                cmd.output = configuration.output;
            }

            // persistent step artifacts may be enabled via the configuration
            cmd.save_steps |= configuration.save_steps;

            // if the user has passed an output filename, override the default filename
            let mut filename: String = "restored_main.c".to_string();
            let given_name = cmd.name.as_str();

            if !given_name.is_empty() {
                filename = format!("{}-{}", given_name, filename);
            }

            let result = restore(cmd.clone())?;

            if cmd.output == "print" {
                print_with_less(&result.source)
                    .map_err(|e| Error::Generic(format!("failed to print source: {}", e)))?;
            } else {
                // write each stage's intermediate output before the final artifact
                if cmd.save_steps {
                    for (i, step) in result.steps.iter().enumerate() {
                        let step_filename = format!("step{}_{}.c", i + 1, step.label);
                        let step_path =
                            build_output_path(&cmd.output, &cmd.target, &step_filename).map_err(
                                |e| Error::Generic(format!("failed to build output path: {}", e)),
                            )?;

                        write_file(&step_path, &step.source).map_err(|e| {
                            Error::Generic(format!("failed to write step artifact: {}", e))
                        })?;
                    }
                }

                let output_path = build_output_path(&cmd.output, &cmd.target, &filename)
                    .map_err(|e| Error::Generic(format!("failed to build output path: {}", e)))?;

                write_file(&output_path, &result.source)
                    .map_err(|e| Error::Generic(format!("failed to write source: {}", e)))?;
            }
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {}", e)))?;
        }
    }

    Ok(())
}
