use std::io::Write;

use super::GraphWriter;
use crate::config::DotAttributes;
use crate::constants::dot::CLUSTER_PREFIX;
use crate::error::GrandError;
use crate::filters::{GraphConsumer, GraphProducer};
use crate::graph::{Graph, LinkAttributes, NodeAttributes, NodeRef};
use crate::utils::string::quoted;

/// Graphviz DOT output
///
/// The start node is written first, then every other node of the main table
/// in insertion order, then one `cluster_` block per subgraph. Each node
/// statement is followed by its outgoing links; links get a positional label
/// when the node has more than one.
pub struct DotWriter {
    attributes: DotAttributes,
    show_graph_name: bool,
    producer: Option<Box<dyn GraphProducer>>,
}

impl DotWriter {
    pub fn new(attributes: DotAttributes) -> Self {
        Self {
            attributes,
            show_graph_name: false,
            producer: None,
        }
    }

    /// Label the drawing with the graph name
    pub fn with_show_graph_name(mut self, show_graph_name: bool) -> Self {
        self.show_graph_name = show_graph_name;
        self
    }

    fn write_node(&self, node: NodeRef<'_>, output: &mut dyn Write) -> Result<(), GrandError> {
        let name = quoted(node.name());

        let mut attributes = Vec::new();
        if let Some(flavor) = self.node_flavor_attributes(node) {
            attributes.push(flavor.to_string());
        }
        if let Some(description) = node.description() {
            attributes.push(format!("comment={}", quoted(description)));
        }
        writeln_out!(output, "{name}{};", bracketed(&attributes))?;

        let links: Vec<_> = node.links().collect();
        let labelled = links.len() > 1;
        for (index, link) in links.iter().enumerate() {
            let mut attributes = Vec::new();
            if labelled {
                attributes.push(format!("label=\"{}\"", index + 1));
            }
            if link.has_attributes(LinkAttributes::WEAK) && !self.attributes.weak_link.is_empty() {
                attributes.push(self.attributes.weak_link.clone());
            }
            if link.has_attributes(LinkAttributes::CONDITIONAL)
                && !self.attributes.conditional_link.is_empty()
            {
                attributes.push(self.attributes.conditional_link.clone());
            }
            writeln_out!(
                output,
                "{name} -> {}{};",
                quoted(link.end_node().name()),
                bracketed(&attributes)
            )?;
        }

        writeln_out!(output)
    }

    /// Start, main and missing attributes, first match wins
    fn node_flavor_attributes(&self, node: NodeRef<'_>) -> Option<&str> {
        [
            (NodeAttributes::START, &self.attributes.start_node),
            (NodeAttributes::MAIN, &self.attributes.main_node),
            (NodeAttributes::MISSING, &self.attributes.missing_node),
        ]
        .into_iter()
        .find(|(flag, _)| node.has_attributes(*flag))
        .map(|(_, attributes)| attributes.as_str())
        .filter(|attributes| !attributes.is_empty())
    }
}

fn bracketed(attributes: &[String]) -> String {
    if attributes.is_empty() {
        String::new()
    } else {
        format!(" [{}]", attributes.join(","))
    }
}

impl GraphConsumer for DotWriter {
    fn set_producer(&mut self, producer: Box<dyn GraphProducer>) {
        self.producer = Some(producer);
    }
}

impl GraphWriter for DotWriter {
    fn name(&self) -> &str {
        "dot writer"
    }

    fn producer(&self) -> Option<&dyn GraphProducer> {
        self.producer.as_deref()
    }

    fn render(&self, graph: &Graph, output: &mut dyn Write) -> Result<(), GrandError> {
        writeln_out!(output, "digraph {} {{", quoted(graph.name()))?;

        let mut graph_attributes: Vec<String> = Some(self.attributes.graph.clone())
            .filter(|attributes| !attributes.is_empty())
            .into_iter()
            .collect();
        if self.show_graph_name {
            graph_attributes.push(format!("label={}", quoted(graph.name())));
        }
        writeln_out!(output, "graph [{}];", graph_attributes.join(","))?;
        writeln_out!(output, "node [{}];", self.attributes.node)?;
        writeln_out!(output, "edge [{}];", self.attributes.link)?;

        let start = graph.start_node();
        if let Some(start) = start {
            self.write_node(start, output)?;
        }
        for node in graph.nodes() {
            if Some(node) == start || node.name().is_empty() {
                continue;
            }
            self.write_node(node, output)?;
        }

        for subgraph in graph.subgraphs() {
            writeln_out!(
                output,
                "subgraph {} {{",
                quoted(&format!("{CLUSTER_PREFIX}{}", subgraph.name()))
            )?;
            writeln_out!(output, "label={};", quoted(subgraph.name()))?;
            for node in subgraph.nodes() {
                if Some(node) == start || node.name().is_empty() {
                    continue;
                }
                self.write_node(node, output)?;
            }
            writeln_out!(output, "}}")?;
        }

        writeln_out!(output, "}}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain() -> DotAttributes {
        DotAttributes {
            graph: String::new(),
            node: "shape=box".to_string(),
            link: String::new(),
            start_node: "style=bold".to_string(),
            main_node: "style=filled".to_string(),
            missing_node: "color=red".to_string(),
            weak_link: "style=dashed".to_string(),
            conditional_link: "color=grey".to_string(),
        }
    }

    fn render(writer: &DotWriter, graph: &Graph) -> String {
        let mut output = Vec::new();
        writer.render(graph, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_single_link_has_no_label() {
        let mut graph = Graph::new("simple");
        let build = graph.create_node("build").unwrap();
        let compile = graph.create_node("compile").unwrap();
        graph.create_link(None, build, compile).unwrap();

        let expected = "\
digraph \"simple\" {
graph [];
node [shape=box];
edge [];
\"build\";
\"build\" -> \"compile\";

\"compile\";

}
";
        assert_eq!(render(&DotWriter::new(plain()), &graph), expected);
    }

    #[test]
    fn test_start_node_first_and_positional_labels() {
        let mut graph = Graph::new("build");
        let init = graph.create_node("init").unwrap();
        let dist = graph.create_node("dist").unwrap();
        let docs = graph.create_node("docs").unwrap();
        graph.create_link(None, dist, init).unwrap();
        let call = graph.create_link(Some("call"), dist, docs).unwrap();
        graph.add_link_attributes(call, LinkAttributes::WEAK).unwrap();
        graph.set_start_node(Some(dist)).unwrap();
        graph.add_node_attributes(dist, NodeAttributes::MAIN).unwrap();
        graph
            .set_node_description(dist, Some("Make \"dist\"".to_string()))
            .unwrap();
        graph.add_node_attributes(docs, NodeAttributes::MISSING).unwrap();

        let expected = r#"digraph "build" {
graph [label="build"];
node [shape=box];
edge [];
"dist" [style=bold,comment="Make \"dist\""];
"dist" -> "init" [label="1"];
"dist" -> "docs" [label="2",style=dashed];

"init";

"docs" [color=red];

}
"#;
        let writer = DotWriter::new(plain()).with_show_graph_name(true);
        assert_eq!(render(&writer, &graph), expected);
    }

    #[test]
    fn test_conditional_links_and_main_nodes() {
        let mut graph = Graph::new("cond");
        let deploy = graph.create_node("deploy").unwrap();
        let dist = graph.create_node("dist").unwrap();
        let link = graph.create_link(None, deploy, dist).unwrap();
        graph
            .add_link_attributes(link, LinkAttributes::CONDITIONAL)
            .unwrap();
        graph.add_node_attributes(dist, NodeAttributes::MAIN).unwrap();

        let output = render(&DotWriter::new(plain()), &graph);
        assert!(output.contains("\"deploy\" -> \"dist\" [color=grey];\n"));
        assert!(output.contains("\"dist\" [style=filled];\n"));
    }

    #[test]
    fn test_empty_names_are_skipped() {
        let mut graph = Graph::new("g");
        graph.create_node("").unwrap();
        graph.create_node("kept").unwrap();

        let output = render(&DotWriter::new(plain()), &graph);
        assert!(!output.contains("\"\";"));
        assert!(output.contains("\"kept\";"));
    }

    #[test]
    fn test_subgraphs_render_as_clusters() {
        let mut graph = Graph::new("parts");
        graph.create_subgraph("core").unwrap();
        let runtime = graph.create_node_in("core", "runtime").unwrap();
        let app = graph.create_node("app").unwrap();
        graph.create_link(None, app, runtime).unwrap();

        let expected = "\
digraph \"parts\" {
graph [];
node [shape=box];
edge [];
\"app\";
\"app\" -> \"runtime\";

subgraph \"cluster_core\" {
label=\"core\";
\"runtime\";

}
}
";
        assert_eq!(render(&DotWriter::new(plain()), &graph), expected);
    }

    #[test]
    fn test_write_pulls_from_producer() {
        let mut graph = Graph::new("pulled");
        graph.create_node("only").unwrap();

        let mut writer = DotWriter::new(plain());
        let mut output = Vec::new();
        assert!(matches!(
            writer.write(&mut output),
            Err(GrandError::NoProducer { .. })
        ));

        writer.set_producer(Box::new(graph));
        writer.write(&mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().starts_with("digraph \"pulled\" {\n"));
    }
}
