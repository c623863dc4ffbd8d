//! Error handling for gizmo-kit
//!
//! Picking and dragging never fail: a miss is an empty `Option` and a failed
//! drag returns the value it started from. Errors are reserved for
//! construction-time utilities such as geometry emitters and ray unprojection,
//! where bad input is a programming mistake worth surfacing.

use thiserror::Error;

/// Result type for gizmo-kit operations
pub type GizmoResult<T> = Result<T, GizmoError>;

/// Errors that can occur while building gizmo geometry or rays
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GizmoError {
    /// Geometry parameters cannot produce a valid triangle list
    #[error("Invalid geometry parameters: {reason}")]
    InvalidGeometry {
        /// The reason why the parameters were rejected
        reason: String,
    },

    /// Invalid viewport configuration
    #[error("Invalid viewport: {reason}")]
    InvalidViewport {
        /// The reason why the viewport is invalid
        reason: String,
    },

    /// Math operation error
    #[error("Math operation failed: {operation}")]
    MathOperation {
        /// The mathematical operation that failed
        operation: String,
    },
}

impl GizmoError {
    /// Create an invalid geometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        crate::gizmo_warn!("Invalid geometry parameters: {}", reason);
        Self::InvalidGeometry { reason }
    }

    /// Create an invalid viewport error
    pub fn invalid_viewport(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        crate::gizmo_debug!("Invalid viewport: {}", reason);
        Self::InvalidViewport { reason }
    }

    /// Create a math operation error
    pub fn math_operation(operation: impl Into<String>) -> Self {
        let operation = operation.into();
        crate::gizmo_error!("Math operation failed: {}", operation);
        Self::MathOperation { operation }
    }
}

/// Macro for conditional tracing
#[macro_export]
macro_rules! gizmo_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

/// Macro for conditional debug logging
#[macro_export]
macro_rules! gizmo_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Macro for conditional warning logging
#[macro_export]
macro_rules! gizmo_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    };
}

/// Macro for conditional error logging
#[macro_export]
macro_rules! gizmo_error {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::error!($($arg)*);
    };
}
