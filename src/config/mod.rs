//! # Configuration Module
//!
//! Configuration structures for the grand commands. Each command has its own
//! config module with a builder generated by [`impl_builder!`].
//!
//! - **RenderConfig**: the `render` command
//! - **NodesConfig**: the `nodes` command
//! - **OutputConfig**: DOT attribute strings, optionally loaded from TOML
//!
//! ## Example
//!
//! ```
//! use grand::cli::OutputFormat;
//! use grand::common::ConfigBuilder;
//! use grand::config::NodesConfig;
//!
//! let config = NodesConfig::builder()
//!     .with_build_file("build.toml".into())
//!     .with_filters(vec!["isolatednode".parse().unwrap()])
//!     .with_format(OutputFormat::Human)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.filters.len(), 1);
//!
//! // Unset fields are reported by name
//! let err = NodesConfig::builder().build().unwrap_err();
//! assert!(err.to_string().contains("build_file"));
//! ```
//!
//! [`impl_builder!`]: crate::impl_builder

pub mod nodes;
pub mod output;
pub mod render;

pub use nodes::NodesConfig;
pub use output::{DotAttributes, OutputConfig};
pub use render::RenderConfig;
