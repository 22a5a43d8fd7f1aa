//! Error types for the adjustment engine.
//!
//! These never reach the UI collaborator through the engine entry points;
//! [`crate::engine`] recovers every variant by returning the source image.
//! They are public so the fallible `render_*` functions can report what went
//! wrong to callers that care.

use thiserror::Error;

use crate::image::Extent;
use crate::transform::{ParamKey, TransformId};

/// Failures raised while building or running a transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// The transform rejected a parameter key it does not understand.
    #[error("transform '{transform}' does not accept parameter '{key}'")]
    UnknownParameter { transform: TransformId, key: ParamKey },

    /// A parameter had the wrong shape or an out-of-domain value.
    #[error("transform '{transform}' rejected parameter '{key}': {reason}")]
    InvalidParameter {
        transform: TransformId,
        key: ParamKey,
        reason: String,
    },

    /// The transform ran but produced no usable output.
    #[error("transform '{transform}' produced no output: {reason}")]
    Execution { transform: TransformId, reason: String },

    /// The input image was empty or its buffer did not match its size.
    #[error("malformed input image: {0}")]
    MalformedInput(String),

    /// The crop rectangle could not be resolved against the produced extent.
    #[error("cannot crop extent {produced:?} to {requested:?}")]
    ExtentResolution { produced: Extent, requested: Extent },
}

/// Coarse classification of [`FilterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The transform could not be instantiated.
    TransformConstruction,
    /// A constructed transform produced no usable output.
    TransformExecution,
    /// No crop/output rectangle could be determined.
    ExtentResolution,
}

impl FilterError {
    /// Which of the three failure families this error belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            FilterError::UnknownParameter { .. } | FilterError::InvalidParameter { .. } => {
                FailureKind::TransformConstruction
            }
            FilterError::Execution { .. } | FilterError::MalformedInput(_) => {
                FailureKind::TransformExecution
            }
            FilterError::ExtentResolution { .. } => FailureKind::ExtentResolution,
        }
    }
}
