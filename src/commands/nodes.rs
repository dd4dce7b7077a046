//! Nodes command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::NodesConfig;
use crate::error::GrandError;

impl FromCommand for NodesConfig {
    fn from_command(command: Commands) -> Result<Self, GrandError> {
        match command {
            Commands::Nodes { common, format } => NodesConfig::builder()
                .with_filters(common.filter_specs()?)
                .with_build_file(common.build_file)
                .with_format(format.format)
                .build(),
            _ => Err(GrandError::ConfigurationError {
                message: "Invalid command type for NodesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(NodesConfig);

/// Execute the nodes command
pub fn execute_nodes_command(command: Commands) -> Result<()> {
    let config = NodesConfig::from_command(command)
        .wrap_err("Failed to parse nodes command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::nodes::NodesExecutor;
    NodesExecutor::execute(config)
}
