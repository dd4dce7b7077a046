//! # grand
//!
//! Turns a build description into a directed graph of targets, prunes it
//! through composable filters and writes it as a Graphviz diagram.
//!
//! The pipeline is pull-based: the last stage asks its producer for a graph,
//! which asks its own producer, down to the build file.
//!
//! ```
//! use grand::filters::{FilterChain, GraphConsumer, IsolatedNodeFilter};
//! use grand::output::{DotWriter, GraphWriter};
//! use grand::project::BuildFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let build: BuildFile = r#"
//! [project]
//! name = "demo"
//!
//! [[target]]
//! name = "dist"
//! depends = ["compile"]
//!
//! [[target]]
//! name = "compile"
//!
//! [[target]]
//! name = "unused"
//! "#
//! .parse()?;
//!
//! let mut chain = FilterChain::new();
//! chain.set_producer(Box::new(build));
//! chain.add_filter_last(Box::new(IsolatedNodeFilter));
//!
//! let mut writer = DotWriter::new(Default::default());
//! writer.set_producer(Box::new(chain));
//!
//! let mut output = Vec::new();
//! writer.write(&mut output)?;
//! let dot = String::from_utf8(output)?;
//! assert!(dot.contains(r#""dist" -> "compile";"#));
//! assert!(!dot.contains("unused"));
//! # Ok(())
//! # }
//! ```

mod constants;
mod logging;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod filters;
pub mod graph;
pub mod output;
pub mod project;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    execute_command(cli.command)
}
