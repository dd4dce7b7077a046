//! Filter registry
//!
//! Filters are named on the command line as `name` or `name:parameter`, for
//! instance `fromnode:dist` or `removenode:init,clean`.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use super::{GraphFilter, GraphWalkFilter, IsolatedNodeFilter, MissingNodeFilter, NodeRemoverFilter};
use crate::error::GrandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    IsolatedNode,
    MissingNode,
    FromNode,
    ToNode,
    Connected,
    RemoveNode,
}

impl FilterKind {
    pub const ALL: [FilterKind; 6] = [
        FilterKind::IsolatedNode,
        FilterKind::MissingNode,
        FilterKind::FromNode,
        FilterKind::ToNode,
        FilterKind::Connected,
        FilterKind::RemoveNode,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::IsolatedNode => "isolatednode",
            FilterKind::MissingNode => "missingnode",
            FilterKind::FromNode => "fromnode",
            FilterKind::ToNode => "tonode",
            FilterKind::Connected => "connected",
            FilterKind::RemoveNode => "removenode",
        }
    }

    /// What the parameter names, if the filter takes one
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            FilterKind::IsolatedNode | FilterKind::MissingNode => None,
            FilterKind::FromNode | FilterKind::ToNode | FilterKind::Connected => Some("node"),
            FilterKind::RemoveNode => Some("node list"),
        }
    }
}

impl FromStr for FilterKind {
    type Err = GrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GrandError::UnknownFilter {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed `name[:parameter]` filter description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub kind: FilterKind,
    pub parameter: Option<String>,
}

impl FilterSpec {
    /// Instantiate the described filter
    pub fn build(&self) -> Result<Box<dyn GraphFilter>, GrandError> {
        let filter: Box<dyn GraphFilter> = match self.kind {
            FilterKind::IsolatedNode => {
                self.warn_useless_parameter();
                Box::new(IsolatedNodeFilter)
            }
            FilterKind::MissingNode => {
                self.warn_useless_parameter();
                Box::new(MissingNodeFilter)
            }
            FilterKind::FromNode => Box::new(GraphWalkFilter::from_node(self.required()?)),
            FilterKind::ToNode => Box::new(GraphWalkFilter::to_node(self.required()?)),
            FilterKind::Connected => Box::new(GraphWalkFilter::connected_to(self.required()?)),
            FilterKind::RemoveNode => {
                let nodes: Vec<&str> = self
                    .required()?
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .collect();
                if nodes.is_empty() {
                    return Err(self.missing_parameter());
                }
                Box::new(NodeRemoverFilter::new(nodes))
            }
        };
        Ok(filter)
    }

    fn required(&self) -> Result<&str, GrandError> {
        self.parameter
            .as_deref()
            .ok_or_else(|| self.missing_parameter())
    }

    fn missing_parameter(&self) -> GrandError {
        GrandError::MissingFilterParameter {
            filter: self.kind.name().to_string(),
            parameter: self.kind.parameter().unwrap_or("node").to_string(),
        }
    }

    fn warn_useless_parameter(&self) {
        if let Some(parameter) = &self.parameter {
            warn!(filter = self.kind.name(), parameter = %parameter, "parameter is ignored by this filter");
        }
    }
}

impl FromStr for FilterSpec {
    type Err = GrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, parameter) = match s.split_once(':') {
            Some((name, parameter)) => (name.trim(), Some(parameter.trim())),
            None => (s.trim(), None),
        };
        Ok(Self {
            kind: name.parse()?,
            parameter: parameter
                .filter(|parameter| !parameter.is_empty())
                .map(str::to_string),
        })
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(parameter) => write!(f, "{}:{}", self.kind, parameter),
            None => write!(f, "{}", self.kind),
        }
    }
}
