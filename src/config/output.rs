//! Output configuration
//!
//! Graphviz attribute strings used by the DOT writer. Every key is optional
//! in the configuration file:
//!
//! ```toml
//! [dot]
//! graph = 'rankdir="TB"'
//! weak_link = 'style="dotted"'
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::constants::dot;
use crate::error::GrandError;
use crate::utils::source::read_toml;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DotAttributes {
    pub graph: String,
    pub node: String,
    pub link: String,
    pub start_node: String,
    pub main_node: String,
    pub missing_node: String,
    pub weak_link: String,
    pub conditional_link: String,
}

impl Default for DotAttributes {
    fn default() -> Self {
        Self {
            graph: dot::GRAPH_ATTRIBUTES.to_string(),
            node: dot::NODE_ATTRIBUTES.to_string(),
            link: dot::LINK_ATTRIBUTES.to_string(),
            start_node: dot::START_NODE_ATTRIBUTES.to_string(),
            main_node: dot::MAIN_NODE_ATTRIBUTES.to_string(),
            missing_node: dot::MISSING_NODE_ATTRIBUTES.to_string(),
            weak_link: dot::WEAK_LINK_ATTRIBUTES.to_string(),
            conditional_link: dot::CONDITIONAL_LINK_ATTRIBUTES.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dot: DotAttributes,
}

impl OutputConfig {
    pub fn from_file(path: &Path) -> Result<Self, GrandError> {
        read_toml(path)
    }

    /// Load `path` when given, built-in defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, GrandError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }
}
