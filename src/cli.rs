use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "grand",
    about = "Draw the dependency graph of a build description",
    long_about = "grand reads a TOML build description, turns its targets and their \
                  dependencies into a graph, optionally prunes that graph through a chain of \
                  filters and writes the result as a Graphviz DOT diagram, JSON or a plain \
                  node listing.",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the (filtered) target graph
    ///
    /// Writes the graph of the build description as a Graphviz DOT diagram or
    /// as JSON. Filters are applied in the order they are given.
    #[command(
        long_about = "Render the dependency graph of a build description. Every --filter is \
                      added to the end of the filter chain, so '--filter fromnode:dist --filter \
                      isolatednode' first keeps what 'dist' depends on, then drops the nodes left \
                      without links. Available filters: isolatednode, missingnode, \
                      fromnode:NODE, tonode:NODE, connected:NODE, removenode:NODE[,NODE...]."
    )]
    Render {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "GRAND_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "GRAND_OUTPUT")]
        output: Option<PathBuf>,

        /// Label the drawing with the project name
        #[arg(long, env = "GRAND_SHOW_GRAPH_NAME")]
        show_graph_name: bool,

        /// TOML file overriding the DOT attributes
        #[arg(long, value_name = "FILE", env = "GRAND_OUTPUT_CONFIG")]
        output_config: Option<PathBuf>,
    },

    /// List the nodes of the (filtered) target graph
    ///
    /// Prints every remaining node with its attributes, description and
    /// outgoing links.
    Nodes {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Dot,
    Json,
}
