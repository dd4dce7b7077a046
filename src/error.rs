use std::fmt;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(grand::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

/// The kind of named element a [`GrandError::DuplicateName`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node,
    SubGraph,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Node => write!(f, "node"),
            ElementKind::SubGraph => write!(f, "subgraph"),
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum GrandError {
    #[error("A {kind} named '{name}' already exists")]
    #[diagnostic(
        code(grand::duplicate_name),
        help("Names must be unique within their container")
    )]
    DuplicateName { kind: ElementKind, name: String },

    #[error("Node '{name}' does not exist")]
    #[diagnostic(
        code(grand::non_existent_node),
        help("Check the node name given to the filter against the build description")
    )]
    NonExistentNode { name: String },

    #[error("Subgraph '{name}' does not exist")]
    #[diagnostic(
        code(grand::unknown_subgraph),
        help("Create the subgraph before adding nodes to it")
    )]
    UnknownSubGraph { name: String },

    #[error("No graph producer set for '{stage}'")]
    #[diagnostic(
        code(grand::no_producer),
        help("Call set_producer before pulling a graph from this stage")
    )]
    NoProducer { stage: String },

    #[error("Filter {name} not configured")]
    #[diagnostic(
        code(grand::unknown_filter),
        help("Known filters: isolatednode, missingnode, fromnode, tonode, connected, removenode")
    )]
    UnknownFilter { name: String },

    #[error("Filter '{filter}' requires a {parameter} parameter")]
    #[diagnostic(
        code(grand::missing_filter_parameter),
        help("Pass the parameter after a colon, e.g. 'fromnode:build'")
    )]
    MissingFilterParameter { filter: String, parameter: String },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(grand::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(grand::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(grand::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(grand::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(grand::graph_error),
        help("The build description could not be turned into a graph")
    )]
    GraphError { message: String },
}
