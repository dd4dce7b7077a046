//! Nodes command executor

use std::io::{self, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::build_pipeline;
use crate::cli::OutputFormat;
use crate::config::NodesConfig;
use crate::executors::CommandExecutor;
use crate::filters::GraphConsumer;
use crate::output::{GraphWriter, JsonWriter, NodeListWriter};

pub struct NodesExecutor;

impl CommandExecutor for NodesExecutor {
    type Config = NodesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        if config.format == OutputFormat::Human {
            eprintln!(
                "{} Listing targets of {}...",
                style("🔍").cyan(),
                style(config.build_file.display()).bold()
            );
        }

        let chain = build_pipeline(&config.build_file, &config.filters)
            .wrap_err("Failed to set up the filter chain")?;

        let mut writer: Box<dyn GraphWriter> = match config.format {
            OutputFormat::Human => Box::new(NodeListWriter::new()),
            OutputFormat::Json => Box::new(JsonWriter::new()),
        };
        writer.set_producer(Box::new(chain));

        let mut stdout = io::stdout().lock();
        writer.write(&mut stdout).wrap_err("Failed to list nodes")?;
        stdout.flush().into_diagnostic()?;

        Ok(())
    }
}
