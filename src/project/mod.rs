//! # Build Description Ingestion
//!
//! Reads a TOML build description and turns it into a [`Graph`]: targets
//! become nodes, `depends` entries become links and `calls` entries become
//! weak links.
//!
//! ```
//! use grand::filters::GraphProducer;
//! use grand::graph::NodeAttributes;
//! use grand::project::BuildFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let build: BuildFile = r#"
//! [project]
//! name = "demo"
//! default = "dist"
//!
//! [[target]]
//! name = "dist"
//! description = "Build the distribution"
//! depends = ["compile"]
//! "#
//! .parse()?;
//!
//! let graph = build.get_graph()?;
//! assert_eq!(graph.start_node().map(|node| node.name()), Some("dist"));
//! assert!(graph.node("compile").ok_or("no node")?.has_attributes(NodeAttributes::MISSING));
//! # Ok(())
//! # }
//! ```
//!
//! [`Graph`]: crate::graph::Graph

mod manifest;
mod producer;

pub use manifest::{BuildFile, Project, Target};
pub use producer::BuildFileProducer;
