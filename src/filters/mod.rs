//! # Filter Pipeline
//!
//! Pull-based composition of graph transformations. A [`GraphProducer`]
//! hands out a graph on demand, a [`GraphConsumer`] is wired to an upstream
//! producer, and a [`GraphFilter`] prunes the graph it is given.
//!
//! Filters receive the upstream graph by value and return the pruned graph,
//! so every pull re-runs the whole pipeline from the producer and the result
//! never depends on how often a stage was pulled before.
//!
//! ## Example
//!
//! ```
//! use grand::filters::{FilterChain, GraphConsumer, GraphProducer, GraphWalkFilter};
//! use grand::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new("build");
//! let dist = graph.create_node("dist")?;
//! let compile = graph.create_node("compile")?;
//! graph.create_node("docs")?;
//! graph.create_link(None, dist, compile)?;
//!
//! let mut chain = FilterChain::new();
//! chain.set_producer(Box::new(graph));
//! chain.add_filter_last(Box::new(GraphWalkFilter::from_node("dist")));
//!
//! let filtered = chain.get_graph()?;
//! assert!(filtered.has_node("compile"));
//! assert!(!filtered.has_node("docs"));
//! # Ok(())
//! # }
//! ```

mod chain;
mod factory;
mod isolated;
mod missing;
mod remover;
mod walk;

pub use chain::FilterChain;
pub use factory::{FilterKind, FilterSpec};
pub use isolated::IsolatedNodeFilter;
pub use missing::MissingNodeFilter;
pub use remover::NodeRemoverFilter;
pub use walk::GraphWalkFilter;
use tracing::debug;

use crate::error::GrandError;
use crate::graph::Graph;

/// Anything a graph can be pulled from
pub trait GraphProducer {
    fn get_graph(&self) -> Result<Graph, GrandError>;
}

/// A stage that pulls its input from an upstream producer
pub trait GraphConsumer {
    fn set_producer(&mut self, producer: Box<dyn GraphProducer>);
}

/// A graph transformation
pub trait GraphFilter {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Prune `graph` and hand it back
    fn filter(&self, graph: Graph) -> Result<Graph, GrandError>;
}

/// A fixed graph feeds a pipeline with a fresh copy on every pull
impl GraphProducer for Graph {
    fn get_graph(&self) -> Result<Graph, GrandError> {
        Ok(self.clone())
    }
}

/// Standalone pipeline stage around a single filter
///
/// Plays both pipeline roles: it consumes from its producer and can itself
/// be handed to the next consumer.
pub struct FilterStage<F> {
    filter: F,
    producer: Option<Box<dyn GraphProducer>>,
}

impl<F: GraphFilter> FilterStage<F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            producer: None,
        }
    }

    pub fn with_producer(mut self, producer: Box<dyn GraphProducer>) -> Self {
        self.producer = Some(producer);
        self
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }
}

impl<F: GraphFilter> GraphConsumer for FilterStage<F> {
    fn set_producer(&mut self, producer: Box<dyn GraphProducer>) {
        self.producer = Some(producer);
    }
}

impl<F: GraphFilter> GraphProducer for FilterStage<F> {
    fn get_graph(&self) -> Result<Graph, GrandError> {
        let producer = self
            .producer
            .as_ref()
            .ok_or_else(|| GrandError::NoProducer {
                stage: self.filter.name().to_string(),
            })?;
        let graph = producer.get_graph()?;
        debug!(filter = self.filter.name(), graph = %graph.name(), "triggering filter");
        self.filter.filter(graph)
    }
}
