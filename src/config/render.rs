//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::config::OutputConfig;
use crate::filters::FilterSpec;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub build_file: PathBuf,
    pub filters: Vec<FilterSpec>,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub show_graph_name: bool,
    pub output_config: OutputConfig,
}

crate::impl_builder!(RenderConfig, RenderConfigBuilder {
    with_build_file => build_file: PathBuf,
    with_filters => filters: Vec<FilterSpec>,
    with_format => format: GraphFormat,
    with_output => output: Option<PathBuf>,
    with_show_graph_name => show_graph_name: bool,
    with_output_config => output_config: OutputConfig,
});
