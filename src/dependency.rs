//! Dependencies and the change sets computed for a group.
use serde::{Deserialize, Serialize};

use crate::group::DependencyGroup;

/// A single dependency update: where it was and where it is going.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Dependency {
    pub name: String,
    pub version: Option<String>,
    pub previous_version: Option<String>,
    pub package_manager: String,
    /// false for development-only dependencies
    pub production: bool,
}

impl Default for Dependency {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            version: None,
            previous_version: None,
            package_manager: "".to_string(),
            production: true,
        }
    }
}

impl Dependency {
    /// True when the new version differs from the previous one.
    pub fn is_updated(&self) -> bool {
        self.version.is_some() && self.version != self.previous_version
    }
}

/// The set of dependency updates required for a group right now. An empty
/// set means the group is up to date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyChange {
    pub updated_dependencies: Vec<Dependency>,
    pub dependency_group: Option<DependencyGroup>,
}

impl DependencyChange {
    pub fn new(
        updated_dependencies: Vec<Dependency>,
        dependency_group: Option<DependencyGroup>,
    ) -> Self {
        Self {
            updated_dependencies,
            dependency_group,
        }
    }

    pub fn has_updates(&self) -> bool {
        !self.updated_dependencies.is_empty()
    }

    pub fn updated_dependency_names(&self) -> Vec<String> {
        self.updated_dependencies
            .iter()
            .map(|d| d.name.clone())
            .collect()
    }
}
