//! Configuration management for unflatten
//!
//! This crate provides functionality for managing the unflatten configuration,
//! including loading, saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use clap::Parser;
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use tracing::{error, info};
use unflatten_common::utils::io::file::{delete_path, read_file, write_file};

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "unflatten config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. All unflatten core
/// modules will attempt to read from this configuration when possible.
#[derive(Deserialize, Serialize, Debug)]
pub struct Configuration {
    /// The default output directory for restored sources
    pub output: String,

    /// Whether to persist each restoration stage's output as a debug artifact
    pub save_steps: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration { output: "output".to_string(), save_steps: false }
    }
}

#[allow(deprecated)]
impl Configuration {
    /// Returns the current configuration.
    pub fn load() -> Result<Self, Error> {
        let mut home = home_dir().ok_or_else(|| {
            Error::Generic(
                "failed to get home directory. does your os support `std::env::home_dir()`?"
                    .to_string(),
            )
        })?;
        home.push(".unflatten");
        home.push("config.toml");

        // if the config file doesn't exist, create it
        if !home.exists() {
            let config = Configuration::default();
            config.save()?;
        }

        // read the config file
        let contents = read_file(
            home.to_str()
                .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
        )
        .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        // parse the config file
        let config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;

        Ok(config)
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        let mut home = home_dir().ok_or_else(|| {
            Error::Generic(
                "failed to get home directory. does your os support `std::env::home_dir()`?"
                    .to_string(),
            )
        })?;
        home.push(".unflatten");
        home.push("config.toml");

        write_file(
            home.to_str()
                .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.unflatten/config.toml`.
    pub fn delete() -> Result<(), Error> {
        let mut home = home_dir().ok_or_else(|| {
            Error::Generic(
                "failed to get home directory. does your os support `std::env::home_dir()`?"
                    .to_string(),
            )
        })?;
        home.push(".unflatten");
        home.push("config.toml");

        delete_path(
            home.to_str()
                .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
        );

        Ok(())
    }

    /// Update a single key/value pair in the configuration.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        // update the key in the struct and ensure it's the correct type
        match key {
            "output" => {
                self.output = value.to_string();
            }
            "save_steps" => {
                self.save_steps = value.parse::<bool>().map_err(|_| {
                    Error::ParseError(format!(
                        "invalid value: \'{value}\' is not a valid boolean."
                    ))
                })?;
            }
            _ => {
                return Err(Error::Generic(format!(
                    "invalid key: \'{key}\' is not a valid configuration key."
                )))
            }
        }

        // write the updated config to disk
        self.save()?;

        Ok(())
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // read the config file and update the key/value pair
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            // key is set, but no value is set
            error!("found key but no value to set. Please specify a value to set, use `unflatten config --help` for more information.");
        }
    } else {
        // no key is set, print the config file
        println!("{:#?}", Configuration::load()?);
        info!("use `unflatten config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}

#[allow(deprecated)]
#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Test default configuration
    #[test]
    #[serial]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.output, "output");
        assert!(!config.save_steps);
    }

    // Test loading configuration from a file
    #[test]
    #[serial]
    fn test_load_configuration() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let config = Configuration::load().expect("failed to load config file");

        assert_eq!(config.output, "output");
        assert!(!config.save_steps);
    }

    // Test saving configuration to a file
    #[test]
    #[serial]
    fn test_save_configuration() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let mut config = Configuration::default();

        // update output
        config.update("output", "restored").expect("failed to update output");

        // save the config file
        config.save().expect("failed to save config file");

        // load the config file
        let loaded_config = Configuration::load().expect("failed to load config file");

        // ensure the config file was saved correctly
        assert_eq!(loaded_config.output, "restored");
        assert!(!loaded_config.save_steps);
    }

    // Test updating a boolean key
    #[test]
    #[serial]
    fn test_update_save_steps() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let mut config = Configuration::load().expect("failed to load config file");

        config.update("save_steps", "true").expect("failed to update save_steps");
        let loaded_config = Configuration::load().expect("failed to load config file");
        assert!(loaded_config.save_steps);

        assert!(config.update("save_steps", "not-a-bool").is_err());
        assert!(config.update("nonexistent_key", "value").is_err());
    }

    // Test deleting configuration file
    #[test]
    #[serial]
    fn test_delete_configuration() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let mut config = Configuration::load().expect("failed to load config file");

        // save some values to the config file
        config.update("output", "restored").expect("failed to update output");
        config.update("save_steps", "true").expect("failed to update save_steps");

        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let config = Configuration::load().expect("failed to load config file");

        assert_eq!(config.output, "output");
        assert!(!config.save_steps);
    }
}
