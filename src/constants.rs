//! Configuration constants for grand
//!
//! Default values used when neither the command line nor an output
//! configuration file overrides them.

/// Graphviz attribute defaults, written inside the `[...]` of a statement
pub mod dot {
    pub const GRAPH_ATTRIBUTES: &str = r#"rankdir="LR",concentrate="true""#;
    pub const NODE_ATTRIBUTES: &str = r#"fontsize="12",fontname="Helvetica",shape="box""#;
    pub const LINK_ATTRIBUTES: &str = r#"fontsize="10",fontname="Helvetica""#;
    pub const START_NODE_ATTRIBUTES: &str =
        r##"fillcolor="#FFFF99",style="filled,bold",penwidth="2.0""##;
    pub const MAIN_NODE_ATTRIBUTES: &str = r##"fillcolor="#E3F2FD",style="filled""##;
    pub const MISSING_NODE_ATTRIBUTES: &str =
        r##"color="#F57C00",fontcolor="#F57C00",style="dashed""##;
    pub const WEAK_LINK_ATTRIBUTES: &str = r#"style="dashed""#;
    pub const CONDITIONAL_LINK_ATTRIBUTES: &str = r##"color="#90A4AE""##;

    /// Prefix Graphviz requires for a subgraph to be drawn as a box
    pub const CLUSTER_PREFIX: &str = "cluster_";
}

/// Output formatting configuration
pub mod output {
    /// Default format of the `render` command
    pub const DEFAULT_GRAPH_FORMAT: &str = "dot";

    /// Default format of the `nodes` command
    pub const DEFAULT_LIST_FORMAT: &str = "human";
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding a `tracing` filter directive
    pub const ENV_VAR: &str = "GRAND_LOG";

    /// Level used when neither the environment nor `-v` says otherwise
    pub const DEFAULT_LEVEL: &str = "warn";
}
