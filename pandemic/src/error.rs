use thiserror::Error;

/// Errors raised while validating model inputs.
///
/// Validation happens before a run allocates any state, so a simulation
/// either fails here or completes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ModelError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ModelError::InvalidParameter { name, reason: reason.into() }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            ModelError::InvalidParameter { name, .. } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// Like `anyhow::ensure!`, but yields `ModelError::InvalidParameter`.
macro_rules! ensure_param {
    ($cond:expr, $name:expr, $($fmt:tt)+) => {
        if !$cond {
            return Err($crate::error::ModelError::invalid($name, format!($($fmt)+)));
        }
    };
}

pub(crate) use ensure_param;
