//! Render command executor

use std::fs;
use std::io::{self, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::build_pipeline;
use crate::cli::GraphFormat;
use crate::config::RenderConfig;
use crate::executors::CommandExecutor;
use crate::filters::GraphConsumer;
use crate::output::{DotWriter, GraphWriter, JsonWriter};

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} graph of {}...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase(),
            style(config.build_file.display()).bold()
        );

        // The output file is only created once the whole pipeline succeeded.
        let rendered = render(&config)?;

        match &config.output {
            Some(output_path) => {
                fs::write(output_path, &rendered)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to write output file '{}'", output_path.display())
                    })?;
                eprintln!(
                    "{} Graph written to {}",
                    style("✓").green(),
                    style(output_path.display()).bold()
                );
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(&rendered)
                    .and_then(|()| stdout.flush())
                    .into_diagnostic()
                    .wrap_err("Failed to write graph to stdout")?;
            }
        }

        Ok(())
    }
}

/// Pull the filtered graph and serialize it in the configured format
fn render(config: &RenderConfig) -> Result<Vec<u8>> {
    let chain = build_pipeline(&config.build_file, &config.filters)
        .wrap_err("Failed to set up the filter chain")?;

    let mut writer: Box<dyn GraphWriter> = match config.format {
        GraphFormat::Dot => Box::new(
            DotWriter::new(config.output_config.dot.clone())
                .with_show_graph_name(config.show_graph_name),
        ),
        GraphFormat::Json => Box::new(JsonWriter::new()),
    };
    writer.set_producer(Box::new(chain));

    let mut rendered = Vec::new();
    writer
        .write(&mut rendered)
        .wrap_err("Failed to render graph")?;
    Ok(rendered)
}
