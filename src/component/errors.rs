/// Errors from the component domain layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving and presenting components.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// The requested output mode is not one of the supported values.
    #[error("invalid output option {value:?}")]
    InvalidOutput {
        /// The rejected `--output` value.
        value: String,
    },

    /// The directory holds no application manifest.
    #[error("no application found at '{}'", path.display())]
    AppNotFound {
        /// The probed application directory.
        path: PathBuf,
    },

    /// The application manifest could not be parsed.
    #[error("invalid application manifest '{}': {source}", path.display())]
    AppManifest {
        /// Path of the manifest file.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_yaml_bw::Error,
    },

    /// No module with the given name exists in the application.
    #[error("no module '{module}' in application '{app}'{}", suggestions(candidates))]
    ModuleNotFound {
        /// Name of the application that was searched.
        app: String,
        /// The requested module name.
        module: String,
        /// Fuzzy-ranked module names closest to the request.
        candidates: Vec<String>,
    },

    /// A component enumerated by a module has no backing manifest file.
    #[error("no manifest file for component '{component}'")]
    ComponentNotFound {
        /// Qualified display name of the component.
        component: String,
    },

    /// A component manifest could not be parsed.
    #[error("invalid component manifest '{}': {source}", path.display())]
    Manifest {
        /// Path of the manifest file.
        path: PathBuf,
        /// The underlying parse error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A component summary could not be produced.
    #[error("get summary for {component}: {source}")]
    Summarize {
        /// Qualified display name of the component.
        component: String,
        /// The underlying failure.
        source: Box<ComponentError>,
    },

    /// A file read failed.
    #[error("read '{}': {source}", path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// An output sink write failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Serializing the summary document failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ComponentError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidOutput { .. } => 2,
            Self::AppNotFound { .. } | Self::AppManifest { .. } => 3,
            Self::ModuleNotFound { .. } | Self::ComponentNotFound { .. } => 4,
            Self::Manifest { .. }
            | Self::Summarize { .. }
            | Self::Read { .. }
            | Self::Io(_)
            | Self::Json(_) => 1,
        }
    }
}

fn suggestions(candidates: &[String]) -> String {
    if candidates.is_empty() {
        String::new()
    } else {
        format!(". Closest matches:\n  {}", candidates.join("\n  "))
    }
}
