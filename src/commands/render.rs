//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{OutputConfig, RenderConfig};
use crate::error::GrandError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, GrandError> {
        match command {
            Commands::Render {
                common,
                format,
                output,
                show_graph_name,
                output_config,
            } => RenderConfig::builder()
                .with_filters(common.filter_specs()?)
                .with_build_file(common.build_file)
                .with_format(format)
                .with_output(output)
                .with_show_graph_name(show_graph_name)
                .with_output_config(OutputConfig::load(output_config.as_deref())?)
                .build(),
            _ => Err(GrandError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::{GraphFormat, OutputFormat};
    use crate::common::{CommonArgs, FormatArgs};

    fn common(filters: &[&str]) -> CommonArgs {
        CommonArgs {
            build_file: PathBuf::from("build.toml"),
            filters: filters.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_from_render_command() {
        let config = RenderConfig::try_from(Commands::Render {
            common: common(&["fromnode:dist"]),
            format: GraphFormat::Json,
            output: Some(PathBuf::from("out.json")),
            show_graph_name: false,
            output_config: None,
        })
        .unwrap();

        assert_eq!(config.build_file, PathBuf::from("build.toml"));
        assert_eq!(config.filters.len(), 1);
        assert_eq!(config.output, Some(PathBuf::from("out.json")));
        assert_eq!(config.output_config, OutputConfig::default());
    }

    #[test]
    fn test_wrong_command() {
        let err = RenderConfig::from_command(Commands::Nodes {
            common: common(&[]),
            format: FormatArgs {
                format: OutputFormat::Human,
            },
        })
        .unwrap_err();

        assert!(matches!(err, GrandError::ConfigurationError { .. }));
    }

    #[test]
    fn test_invalid_filter_fails_conversion() {
        let result = RenderConfig::from_command(Commands::Render {
            common: common(&["nope"]),
            format: GraphFormat::Dot,
            output: None,
            show_graph_name: false,
            output_config: None,
        });

        assert!(matches!(result, Err(GrandError::UnknownFilter { .. })));
    }
}
