use std::fmt;

/// Error type shared by the checked constructors and samplers.
#[derive(Debug, Clone, PartialEq)]
pub enum TessellationError {
    InvalidArgument { reason: String },
}

impl TessellationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for TessellationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for TessellationError {}
