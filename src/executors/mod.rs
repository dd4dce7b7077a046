//! Command executors that handle the actual logic for each command

pub mod nodes;
pub mod render;

use std::path::Path;

use miette::Result;
use tracing::info;

use crate::error::GrandError;
use crate::filters::{FilterChain, FilterSpec, GraphConsumer};
use crate::project::BuildFileProducer;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Wire `build file -> filters...` into a chain, in command-line order
pub(crate) fn build_pipeline(
    build_file: &Path,
    filters: &[FilterSpec],
) -> Result<FilterChain, GrandError> {
    let mut chain = FilterChain::new();
    chain.set_producer(Box::new(BuildFileProducer::new(build_file)));
    for spec in filters {
        chain.add_filter_last(spec.build()?);
    }
    info!(
        build_file = %build_file.display(),
        filters = chain.len(),
        "pipeline assembled"
    );
    Ok(chain)
}
