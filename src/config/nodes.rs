//! Nodes command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::filters::FilterSpec;

#[derive(Debug, Clone)]
pub struct NodesConfig {
    pub build_file: PathBuf,
    pub filters: Vec<FilterSpec>,
    pub format: OutputFormat,
}

crate::impl_builder!(NodesConfig, NodesConfigBuilder {
    with_build_file => build_file: PathBuf,
    with_filters => filters: Vec<FilterSpec>,
    with_format => format: OutputFormat,
});
