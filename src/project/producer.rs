use std::path::{Path, PathBuf};

use tracing::debug;

use super::manifest::BuildFile;
use crate::error::GrandError;
use crate::filters::GraphProducer;
use crate::graph::Graph;

/// Produces the graph of a build description file
///
/// The file is read again on every pull.
#[derive(Debug, Clone)]
pub struct BuildFileProducer {
    path: PathBuf,
}

impl BuildFileProducer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GraphProducer for BuildFileProducer {
    fn get_graph(&self) -> Result<Graph, GrandError> {
        debug!(path = %self.path.display(), "reading build file");
        BuildFile::parse_file(&self.path)?.to_graph()
    }
}

impl GraphProducer for BuildFile {
    fn get_graph(&self) -> Result<Graph, GrandError> {
        self.to_graph()
    }
}
