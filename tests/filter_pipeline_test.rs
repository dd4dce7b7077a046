//! Filter behaviour through the public pipeline interface

use std::cell::RefCell;
use std::rc::Rc;

use grand::error::GrandError;
use grand::filters::{
    FilterChain, FilterSpec, FilterStage, GraphConsumer, GraphFilter, GraphProducer,
    GraphWalkFilter, IsolatedNodeFilter, NodeRemoverFilter,
};
use grand::graph::{BackwardLinkFinder, ForwardLinkFinder, Graph, GraphCrawler};
use pretty_assertions::assert_eq;

fn graph_of(name: &str, nodes: &[&str], links: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new(name);
    for node in nodes {
        graph.create_node(node).unwrap();
    }
    for (from, to) in links {
        let from = graph.node_id(from).unwrap();
        let to = graph.node_id(to).unwrap();
        graph.create_link(None, from, to).unwrap();
    }
    graph
}

fn names(graph: &Graph) -> Vec<String> {
    graph.nodes().map(|node| node.name().to_string()).collect()
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

#[test]
fn test_crawl_cycle() {
    let graph = graph_of("cycle", &["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);

    let reached = GraphCrawler::new(&ForwardLinkFinder).crawl(graph.node("A").unwrap());
    let reached = sorted(reached.iter().map(|node| node.name().to_string()).collect());
    assert_eq!(reached, vec!["A", "B", "C"]);
}

#[test]
fn test_reachable_from_and_to_are_dual() {
    let nodes = ["a", "b", "c", "d", "e"];
    let links = [("a", "b"), ("b", "c"), ("d", "b"), ("c", "e"), ("e", "c")];
    let reversed: Vec<(&str, &str)> = links.iter().map(|&(from, to)| (to, from)).collect();
    let graph = graph_of("g", &nodes, &links);
    let mirror = graph_of("g", &nodes, &reversed);

    for node in nodes {
        let from = GraphWalkFilter::from_node(node).filter(graph.clone()).unwrap();
        let to = GraphWalkFilter::to_node(node).filter(mirror.clone()).unwrap();
        assert_eq!(sorted(names(&from)), sorted(names(&to)), "node {node}");

        let forward = GraphCrawler::new(&ForwardLinkFinder).crawl(graph.node(node).unwrap());
        let backward = GraphCrawler::new(&BackwardLinkFinder).crawl(mirror.node(node).unwrap());
        assert_eq!(forward.len(), backward.len());
    }
}

#[test]
fn test_isolated_node_filter() {
    let graph = graph_of("g", &["A", "B", "C", "D"], &[("A", "B"), ("B", "C")]);

    let graph = IsolatedNodeFilter.filter(graph).unwrap();
    assert_eq!(names(&graph), vec!["A", "B", "C"]);
}

#[test]
fn test_remover_leaves_linkless_nodes_for_isolated_filter() {
    // The remover keeps A and C even though they lose their links.
    let graph = graph_of("g", &["A", "B", "C", "D"], &[("A", "B"), ("B", "C")]);
    let graph = NodeRemoverFilter::new(["B"]).filter(graph).unwrap();
    assert_eq!(names(&graph), vec!["A", "C", "D"]);

    let graph = IsolatedNodeFilter.filter(graph).unwrap();
    assert!(names(&graph).is_empty());
}

#[test]
fn test_explicit_removal_ignores_connectivity() {
    let graph = graph_of("g", &["A", "B", "C"], &[("A", "B"), ("B", "C")]);

    let graph = NodeRemoverFilter::new(["B"]).filter(graph).unwrap();
    assert_eq!(names(&graph), vec!["A", "C"]);
    assert_eq!(graph.link_count(), 0);
}

#[test]
fn test_non_existent_anchor() {
    let graph = graph_of("g", &["A"], &[]);

    for spec in ["fromnode:gruik", "tonode:gruik", "connected:gruik"] {
        let filter = spec.parse::<FilterSpec>().unwrap().build().unwrap();
        match filter.filter(graph.clone()) {
            Err(GrandError::NonExistentNode { name }) => assert_eq!(name, "gruik"),
            Err(other) => panic!("{spec}: unexpected error {other}"),
            Ok(graph) => panic!("{spec}: got a graph with {} nodes", graph.node_count()),
        }
    }
}

struct Tracer {
    id: &'static str,
    trace: Rc<RefCell<String>>,
}

impl GraphFilter for Tracer {
    fn name(&self) -> &str {
        self.id
    }

    fn filter(&self, graph: Graph) -> Result<Graph, GrandError> {
        self.trace.borrow_mut().push_str(self.id);
        Ok(graph)
    }
}

#[test]
fn test_filter_chain_ordering() {
    let trace = Rc::new(RefCell::new(String::new()));
    let mut chain = FilterChain::new();
    chain.set_producer(Box::new(Graph::new("g")));
    for id in ["1", "2", "3"] {
        chain.add_filter_first(Box::new(Tracer {
            id,
            trace: Rc::clone(&trace),
        }));
    }

    chain.get_graph().unwrap();
    assert_eq!(trace.borrow().as_str(), "321");
}

#[test]
fn test_empty_chain_is_identity() {
    let graph = graph_of("g", &["A", "B", "C", "D"], &[("A", "B"), ("B", "C")]);
    let mut chain = FilterChain::new();
    chain.set_producer(Box::new(graph.clone()));

    assert!(chain.get_graph().unwrap() == graph);
}

#[test]
fn test_chain_feeds_standalone_stage() {
    let graph = graph_of("g", &["A", "B", "C", "D"], &[("A", "B"), ("B", "C")]);
    let mut chain = FilterChain::new();
    chain.set_producer(Box::new(graph));
    chain.add_filter_last(Box::new(GraphWalkFilter::to_node("C")));

    let mut stage = FilterStage::new(NodeRemoverFilter::new(["A"]));
    stage.set_producer(Box::new(chain));

    assert_eq!(names(&stage.get_graph().unwrap()), vec!["B", "C"]);
    assert_eq!(stage.filter().nodes(), &["A".to_string()]);
}
