//! # Graph Writers
//!
//! Consumers at the end of a pipeline: they pull the filtered graph from
//! their producer and serialize it.
//!
//! - **DotWriter**: Graphviz DOT
//! - **JsonWriter**: JSON document for programmatic use
//! - **NodeListWriter**: human-readable node listing

use std::io::Write;

use crate::error::GrandError;
use crate::filters::{GraphConsumer, GraphProducer};
use crate::graph::Graph;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err($crate::error::GrandError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err($crate::error::GrandError::from)
    };
}

mod dot;
mod human;
mod json;

pub use dot::DotWriter;
pub use human::NodeListWriter;
pub use json::JsonWriter;

/// A pipeline consumer serializing the graph it pulls
pub trait GraphWriter: GraphConsumer {
    /// Short name used in errors
    fn name(&self) -> &str;

    fn producer(&self) -> Option<&dyn GraphProducer>;

    /// Serialize `graph` to `output`
    fn render(&self, graph: &Graph, output: &mut dyn Write) -> Result<(), GrandError>;

    /// Pull from the producer and render the result
    fn write(&self, output: &mut dyn Write) -> Result<(), GrandError> {
        let producer = self.producer().ok_or_else(|| GrandError::NoProducer {
            stage: self.name().to_string(),
        })?;
        let graph = producer.get_graph()?;
        self.render(&graph, output)
    }
}
