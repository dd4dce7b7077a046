//! # Graph Model
//!
//! A named directed multigraph of uniquely named nodes and attributed links,
//! plus the breadth-first crawler the filters are built on.
//!
//! ## Components
//!
//! - **Graph**: owns every node and link; the only place they are created or
//!   destroyed
//! - **NodeRef / LinkRef**: borrowed views carrying the graph they belong to
//! - **SubGraph**: a named node partition without link-creation capability
//! - **GraphCrawler**: BFS reachability driven by a [`LinkFinder`]
//!
//! ## Example
//!
//! ```
//! use grand::graph::{ForwardLinkFinder, Graph, GraphCrawler, NodeAttributes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new("build");
//! let dist = graph.create_node("dist")?;
//! let compile = graph.create_node("compile")?;
//! let init = graph.create_node("init")?;
//! graph.create_link(None, dist, compile)?;
//! graph.create_link(None, compile, init)?;
//! graph.set_start_node(Some(dist))?;
//!
//! let start = graph.start_node().ok_or("no start node")?;
//! assert!(start.has_attributes(NodeAttributes::START));
//!
//! let reached = GraphCrawler::new(&ForwardLinkFinder).crawl(start);
//! assert_eq!(reached.len(), 3);
//! # Ok(())
//! # }
//! ```

mod container;
mod crawler;
mod model;
mod refs;
mod types;

pub use container::SubGraph;
pub use crawler::{BackwardLinkFinder, ForwardLinkFinder, GraphCrawler, LinkFinder};
pub use model::Graph;
pub use refs::{LinkRef, NodeRef, SubGraphRef};
pub use types::{LinkAttributes, LinkId, NodeAttributes, NodeId};
