//! Coding standards documents.
//!
//! Standards are static markdown documents with fixed identifiers, stored
//! under `resources/standards/`. Unlike examples there is no fuzzy lookup:
//! an identifier either names a known document or it does not.

use std::fmt;
use std::fs;
use std::str::FromStr;

use crate::config::ResourceConfig;
use crate::error::{Error, Result};

/// A coding standard document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    ProjectStructure,
    ApiCommunication,
    ComponentDesign,
    StateManagement,
}

impl Standard {
    /// All standards, in declaration order.
    pub const ALL: [Standard; 4] = [
        Standard::ProjectStructure,
        Standard::ApiCommunication,
        Standard::ComponentDesign,
        Standard::StateManagement,
    ];

    /// Fixed identifier, also the document's file stem.
    pub fn id(&self) -> &'static str {
        match self {
            Standard::ProjectStructure => "project_structure",
            Standard::ApiCommunication => "api_communication",
            Standard::ComponentDesign => "component_design",
            Standard::StateManagement => "state_management",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Standard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Standard::ALL
            .into_iter()
            .find(|standard| standard.id() == s)
            .ok_or_else(|| Error::StandardNotFound(s.to_string()))
    }
}

/// Read a standard's document text.
///
/// Returns [`Error::StandardNotFound`] when the document file is absent and
/// [`Error::ReadFailure`] when it exists but cannot be read.
pub fn load(config: &ResourceConfig, standard: Standard) -> Result<String> {
    let path = config
        .standards_dir()
        .join(format!("{}.md", standard.id()));

    if !path.is_file() {
        return Err(Error::StandardNotFound(standard.id().to_string()));
    }

    fs::read_to_string(&path).map_err(|source| {
        tracing::error!("Located {} but failed to read it: {}", path.display(), source);
        Error::ReadFailure { path, source }
    })
}
