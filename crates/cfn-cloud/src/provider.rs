//! Stack provider trait definition

use crate::error::Result;
use crate::stack::{StackChange, StackDescription, StackRequest, TemplateValidation};
use async_trait::async_trait;

/// CloudFormation control plane abstraction
///
/// Every call is a single pass-through request. Implementations must not
/// retry, wait for completion or interpret results beyond mapping them into
/// the types in [`crate::stack`].
#[async_trait]
pub trait StackProvider: Send + Sync {
    /// Returns the provider name (e.g., "aws-cloudformation")
    fn name(&self) -> &str;

    /// Describe a stack by name.
    ///
    /// Must return [`crate::CloudError::StackNotFound`] when the provider
    /// reports the stack as missing, and any other error unchanged.
    async fn describe_stack(&self, name: &str) -> Result<StackDescription>;

    /// Validate a template body
    async fn validate_template(&self, template_body: &str) -> Result<TemplateValidation>;

    /// Create a new stack
    async fn create_stack(&self, request: &StackRequest) -> Result<StackChange>;

    /// Update an existing stack with a new template body
    async fn update_stack(&self, request: &StackRequest) -> Result<StackChange>;

    /// Delete a stack by name
    async fn delete_stack(&self, name: &str) -> Result<()>;
}
