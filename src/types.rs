/// Shared serializable output types.
///
/// These are what gets written for callers to consume — the error envelope
/// mirrors the command errors without exposing internal error types.
use serde::{Deserialize, Serialize};

use crate::component::ComponentError;

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Module-name candidates for not-found errors, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `ComponentError`.
    #[must_use]
    pub fn from_component_error(err: &ComponentError) -> Self {
        let (code, candidates) = match err {
            ComponentError::InvalidOutput { .. } => ("invalid_output", None),
            ComponentError::AppNotFound { .. } => ("app_not_found", None),
            ComponentError::AppManifest { .. } => ("invalid_app_manifest", None),
            ComponentError::ModuleNotFound { candidates, .. } => (
                "module_not_found",
                (!candidates.is_empty()).then(|| candidates.clone()),
            ),
            ComponentError::ComponentNotFound { .. } => ("component_not_found", None),
            ComponentError::Manifest { .. } => ("invalid_manifest", None),
            ComponentError::Summarize { .. } => ("summary_failed", None),
            ComponentError::Read { .. } => ("read_failed", None),
            ComponentError::Io(_) => ("io_error", None),
            ComponentError::Json(_) => ("json_error", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                candidates,
            },
        }
    }
}
