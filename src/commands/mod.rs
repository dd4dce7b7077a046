//! Command implementations for the grand CLI
//!
//! - render: write the filtered graph as DOT or JSON
//! - nodes: list the nodes of the filtered graph

pub mod nodes;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Nodes { .. } => nodes::execute_nodes_command(command),
    }
}
