use std::io::Write;

use console::style;

use super::GraphWriter;
use crate::error::GrandError;
use crate::filters::{GraphConsumer, GraphProducer};
use crate::graph::{Graph, NodeRef};
use crate::utils::string::counted;

/// Human-readable listing of the nodes and their outgoing links
#[derive(Default)]
pub struct NodeListWriter {
    producer: Option<Box<dyn GraphProducer>>,
}

impl NodeListWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_node(
        &self,
        node: NodeRef<'_>,
        indent: &str,
        output: &mut dyn Write,
    ) -> Result<(), GrandError> {
        let attributes = node.attributes().names();
        let mut line = format!("{indent}{}", style(node.name()).bold());
        if !attributes.is_empty() {
            line.push_str(&format!(" {}", style(format!("[{}]", attributes.join(", "))).dim()));
        }
        if let Some(description) = node.description() {
            line.push_str(&format!(" - {description}"));
        }
        writeln_out!(output, "{line}")?;

        for link in node.links() {
            let mut line = format!("{indent}  → {}", link.end_node().name());
            let attributes = link.attributes().names();
            if !attributes.is_empty() {
                line.push_str(&format!(" {}", style(format!("({})", attributes.join(", "))).dim()));
            }
            writeln_out!(output, "{line}")?;
        }
        Ok(())
    }
}

impl GraphConsumer for NodeListWriter {
    fn set_producer(&mut self, producer: Box<dyn GraphProducer>) {
        self.producer = Some(producer);
    }
}

impl GraphWriter for NodeListWriter {
    fn name(&self) -> &str {
        "node list writer"
    }

    fn producer(&self) -> Option<&dyn GraphProducer> {
        self.producer.as_deref()
    }

    fn render(&self, graph: &Graph, output: &mut dyn Write) -> Result<(), GrandError> {
        writeln_out!(
            output,
            "{} {} ({}, {})",
            style("📦").blue(),
            style(graph.name()).bold(),
            counted(graph.node_count(), "node"),
            counted(graph.link_count(), "link")
        )?;

        for node in graph.nodes() {
            self.write_node(node, "  ", output)?;
        }
        for subgraph in graph.subgraphs() {
            writeln_out!(output, "  {} {}", style("▸").cyan(), style(subgraph.name()).bold())?;
            for node in subgraph.nodes() {
                self.write_node(node, "    ", output)?;
            }
        }
        Ok(())
    }
}
