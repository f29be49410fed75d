//! Cloud provider error types

use thiserror::Error;

/// Cloud provider errors
#[derive(Error, Debug)]
pub enum CloudError {
    /// The provider reported that the named stack does not exist.
    #[error("Stack not found: {0}")]
    StackNotFound(String),

    /// Any other provider-side failure, with the service error code.
    #[error("{operation} failed [{code}]: {message}")]
    Api {
        operation: &'static str,
        code: String,
        message: String,
    },

    /// Credentials were rejected or have expired.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),
}

impl CloudError {
    /// Whether this error means "the stack is not there" rather than a real failure.
    pub fn is_stack_not_found(&self) -> bool {
        matches!(self, CloudError::StackNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;
