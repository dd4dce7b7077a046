//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::error::GrandError;
use crate::filters::FilterSpec;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Build description to read
    #[arg(value_name = "BUILD_FILE", env = "GRAND_BUILD_FILE")]
    pub build_file: PathBuf,

    /// Filter to apply, as NAME or NAME:PARAMETER (repeatable)
    #[arg(long = "filter", value_name = "SPEC")]
    pub filters: Vec<String>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_LIST_FORMAT, env = "GRAND_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl CommonArgs {
    /// Parse every `--filter` value, failing on the first invalid one
    pub fn filter_specs(&self) -> Result<Vec<FilterSpec>, GrandError> {
        self.filters.iter().map(|spec| spec.parse()).collect()
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, GrandError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, GrandError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::GrandError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
