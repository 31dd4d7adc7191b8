/// The component source seam: module snapshots and summary projections.
use serde::{Deserialize, Serialize};

use super::errors::ComponentError;

/// Read access to an application's components.
///
/// Implementations resolve a module to a snapshot of its components and
/// produce summary projections for single components on demand. The CLI
/// ships a filesystem-backed implementation; tests use an in-memory one.
pub trait ComponentSource {
    /// Resolve a module by name. The empty name is the root module.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError::ModuleNotFound` when no such module exists,
    /// or whatever the backing store reports.
    fn resolve(&self, module: &str) -> Result<Module, ComponentError>;

    /// Produce the summary projection for one component.
    ///
    /// # Errors
    ///
    /// Returns an error when the component's manifest cannot be read or
    /// parsed.
    fn summarize(&self, component: &Component) -> Result<Summary, ComponentError>;
}

/// A snapshot of one module's components, valid for a single listing call.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    components: Vec<Component>,
}

impl Module {
    /// Construct a module snapshot from already-enumerated components.
    #[must_use]
    pub fn new(name: &str, components: Vec<Component>) -> Self {
        Self {
            name: name.to_owned(),
            components,
        }
    }

    /// The module name. Empty for the root module.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The components of this module, in source order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

/// A named component belonging to a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    module: String,
    name: String,
}

impl Component {
    /// Construct a component descriptor.
    #[must_use]
    pub fn new(module: &str, name: &str) -> Self {
        Self {
            module: module.to_owned(),
            name: name.to_owned(),
        }
    }

    /// The owning module's name. Empty for the root module.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The unqualified component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display name, optionally qualified with the module name.
    ///
    /// Root-module components have no qualifier in either form.
    #[must_use]
    pub fn display_name(&self, qualified: bool) -> String {
        if qualified && !self.module.is_empty() {
            format!("{}.{}", self.module, self.name)
        } else {
            self.name.clone()
        }
    }
}

/// A flattened, read-only projection of a component's descriptive fields.
///
/// The serialized field names are the public document contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The component's name.
    #[serde(rename = "ComponentName")]
    pub component_name: String,
    /// The manifest format ("json" or "yaml").
    #[serde(rename = "Type")]
    pub component_type: String,
    /// API version declared by the manifest.
    #[serde(rename = "APIVersion")]
    pub api_version: String,
    /// Resource kind declared by the manifest.
    #[serde(rename = "Kind")]
    pub kind: String,
    /// Object name declared by the manifest.
    #[serde(rename = "Name")]
    pub name: String,
}
