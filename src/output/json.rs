use std::io::Write;

use serde_json::{Value, json};

use super::GraphWriter;
use crate::error::GrandError;
use crate::filters::{GraphConsumer, GraphProducer};
use crate::graph::{Graph, NodeRef};

/// JSON document describing the graph, for programmatic use
#[derive(Default)]
pub struct JsonWriter {
    producer: Option<Box<dyn GraphProducer>>,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_value(graph: &Graph) -> Value {
        let subgraphs: Vec<Value> = graph
            .subgraphs()
            .map(|subgraph| {
                json!({
                    "name": subgraph.name(),
                    "nodes": subgraph.nodes().map(node_value).collect::<Vec<_>>(),
                })
            })
            .collect();

        json!({
            "name": graph.name(),
            "start_node": graph.start_node().map(|node| node.name()),
            "nodes": graph.nodes().map(node_value).collect::<Vec<_>>(),
            "subgraphs": subgraphs,
        })
    }
}

fn node_value(node: NodeRef<'_>) -> Value {
    let links: Vec<Value> = node
        .links()
        .map(|link| {
            json!({
                "name": link.name(),
                "end_node": link.end_node().name(),
                "attributes": link.attributes().names(),
            })
        })
        .collect();

    json!({
        "name": node.name(),
        "description": node.description(),
        "attributes": node.attributes().names(),
        "links": links,
    })
}

impl GraphConsumer for JsonWriter {
    fn set_producer(&mut self, producer: Box<dyn GraphProducer>) {
        self.producer = Some(producer);
    }
}

impl GraphWriter for JsonWriter {
    fn name(&self) -> &str {
        "json writer"
    }

    fn producer(&self) -> Option<&dyn GraphProducer> {
        self.producer.as_deref()
    }

    fn render(&self, graph: &Graph, output: &mut dyn Write) -> Result<(), GrandError> {
        serde_json::to_writer_pretty(&mut *output, &Self::to_value(graph))?;
        writeln_out!(output)
    }
}
