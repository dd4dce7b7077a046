use std::collections::VecDeque;

use tracing::debug;

use super::{GraphConsumer, GraphFilter, GraphProducer};
use crate::error::GrandError;
use crate::graph::Graph;

/// Ordered composition of filters
///
/// Pulling runs `producer -> filters[0] -> ... -> filters[n-1]`. An empty
/// chain hands the producer's graph through untouched. A chain is itself a
/// filter, so chains nest.
#[derive(Default)]
pub struct FilterChain {
    filters: VecDeque<Box<dyn GraphFilter>>,
    producer: Option<Box<dyn GraphProducer>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a filter right after the producer
    pub fn add_filter_first(&mut self, filter: Box<dyn GraphFilter>) {
        debug!(filter = filter.name(), "filter added first");
        self.filters.push_front(filter);
    }

    /// Append a filter at the end of the chain
    pub fn add_filter_last(&mut self, filter: Box<dyn GraphFilter>) {
        debug!(filter = filter.name(), "filter added last");
        self.filters.push_back(filter);
    }

    /// Drop every filter; the producer stays in place
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Filters in pull order
    pub fn filters(&self) -> impl Iterator<Item = &dyn GraphFilter> + '_ {
        self.filters.iter().map(|filter| filter.as_ref())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl GraphConsumer for FilterChain {
    fn set_producer(&mut self, producer: Box<dyn GraphProducer>) {
        self.producer = Some(producer);
    }
}

impl GraphProducer for FilterChain {
    fn get_graph(&self) -> Result<Graph, GrandError> {
        let producer = self
            .producer
            .as_ref()
            .ok_or_else(|| GrandError::NoProducer {
                stage: self.name().to_string(),
            })?;
        let graph = producer.get_graph()?;
        self.filter(graph)
    }
}

impl GraphFilter for FilterChain {
    fn name(&self) -> &str {
        "filter chain"
    }

    fn filter(&self, graph: Graph) -> Result<Graph, GrandError> {
        self.filters.iter().try_fold(graph, |graph, filter| {
            debug!(filter = filter.name(), graph = %graph.name(), "triggering filter");
            filter.filter(graph)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::filters::test_support::{abcd, node_names};
    use crate::filters::{GraphWalkFilter, IsolatedNodeFilter, NodeRemoverFilter};

    /// Appends its id to a shared trace once it has processed the graph
    struct TracingFilter {
        id: &'static str,
        trace: Rc<RefCell<String>>,
    }

    impl GraphFilter for TracingFilter {
        fn name(&self) -> &str {
            self.id
        }

        fn filter(&self, graph: Graph) -> Result<Graph, GrandError> {
            self.trace.borrow_mut().push_str(self.id);
            Ok(graph)
        }
    }

    fn tracing_filters(trace: &Rc<RefCell<String>>) -> [Box<dyn GraphFilter>; 3] {
        ["1", "2", "3"].map(|id| {
            Box::new(TracingFilter {
                id,
                trace: Rc::clone(trace),
            }) as Box<dyn GraphFilter>
        })
    }

    #[test]
    fn test_add_filter_first_reverses_order() {
        let trace = Rc::new(RefCell::new(String::new()));
        let mut chain = FilterChain::new();
        chain.set_producer(Box::new(abcd()));
        for filter in tracing_filters(&trace) {
            chain.add_filter_first(filter);
        }

        chain.get_graph().unwrap();
        assert_eq!(trace.borrow().as_str(), "321");
    }

    #[test]
    fn test_add_filter_last_keeps_order() {
        let trace = Rc::new(RefCell::new(String::new()));
        let mut chain = FilterChain::new();
        chain.set_producer(Box::new(abcd()));
        for filter in tracing_filters(&trace) {
            chain.add_filter_last(filter);
        }

        chain.get_graph().unwrap();
        assert_eq!(trace.borrow().as_str(), "123");
        let names: Vec<&str> = chain.filters().map(|filter| filter.name()).collect();
        assert_eq!(names, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_every_pull_reruns_every_filter() {
        let trace = Rc::new(RefCell::new(String::new()));
        let mut chain = FilterChain::new();
        chain.set_producer(Box::new(abcd()));
        for filter in tracing_filters(&trace) {
            chain.add_filter_last(filter);
        }

        let first = chain.get_graph().unwrap();
        let second = chain.get_graph().unwrap();
        assert_eq!(trace.borrow().as_str(), "123123");
        assert!(first == second);
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let mut chain = FilterChain::new();
        chain.set_producer(Box::new(abcd()));

        let graph = chain.get_graph().unwrap();
        assert!(graph == abcd());
        assert!(chain.is_empty());
    }

    #[test]
    fn test_clear_filters_keeps_producer() {
        let mut chain = FilterChain::new();
        chain.set_producer(Box::new(abcd()));
        chain.add_filter_last(Box::new(IsolatedNodeFilter));
        assert_eq!(node_names(&chain.get_graph().unwrap()), vec!["A", "B", "C"]);

        chain.clear_filters();
        assert_eq!(chain.len(), 0);
        assert!(chain.get_graph().unwrap() == abcd());
    }

    #[test]
    fn test_chain_without_producer() {
        let mut chain = FilterChain::new();
        chain.add_filter_last(Box::new(IsolatedNodeFilter));

        assert!(matches!(
            chain.get_graph(),
            Err(GrandError::NoProducer { .. })
        ));
    }

    #[test]
    fn test_filters_compose_in_order() {
        // Removing B first leaves A, C and D isolated; the walk from A then
        // keeps only A.
        let mut chain = FilterChain::new();
        chain.set_producer(Box::new(abcd()));
        chain.add_filter_last(Box::new(NodeRemoverFilter::new(["B"])));
        chain.add_filter_last(Box::new(GraphWalkFilter::from_node("A")));

        assert_eq!(node_names(&chain.get_graph().unwrap()), vec!["A"]);
    }

    #[test]
    fn test_error_aborts_the_chain() {
        let trace = Rc::new(RefCell::new(String::new()));
        let mut chain = FilterChain::new();
        chain.set_producer(Box::new(abcd()));
        chain.add_filter_last(Box::new(GraphWalkFilter::to_node("gruik")));
        for filter in tracing_filters(&trace) {
            chain.add_filter_last(filter);
        }

        assert!(matches!(
            chain.get_graph(),
            Err(GrandError::NonExistentNode { .. })
        ));
        assert_eq!(trace.borrow().as_str(), "");
    }

    #[test]
    fn test_chains_nest() {
        let mut inner = FilterChain::new();
        inner.add_filter_last(Box::new(IsolatedNodeFilter));

        let mut outer = FilterChain::new();
        outer.set_producer(Box::new(abcd()));
        outer.add_filter_last(Box::new(inner));
        outer.add_filter_last(Box::new(GraphWalkFilter::to_node("B")));

        assert_eq!(node_names(&outer.get_graph().unwrap()), vec!["A", "B"]);
    }
}
