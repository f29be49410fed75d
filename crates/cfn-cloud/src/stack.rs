//! Request and response types for stack operations

use serde::{Deserialize, Serialize};

/// A single stack parameter as submitted to the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackParameter {
    pub key: String,
    pub value: String,
    /// Always false: every submission carries explicit values
    pub use_previous_value: bool,
}

impl StackParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            use_previous_value: false,
        }
    }
}

/// Capabilities acknowledged on create/update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    #[serde(rename = "CAPABILITY_IAM")]
    Iam,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Iam => "CAPABILITY_IAM",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create/update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackRequest {
    /// Cloud-side stack name
    pub name: String,

    /// Generated template document
    pub template_body: String,

    pub parameters: Vec<StackParameter>,

    pub capabilities: Vec<Capability>,
}

impl StackRequest {
    /// Build a request that acknowledges `CAPABILITY_IAM`.
    pub fn new(
        name: impl Into<String>,
        template_body: impl Into<String>,
        parameters: Vec<StackParameter>,
    ) -> Self {
        Self {
            name: name.into(),
            template_body: template_body.into(),
            parameters,
            capabilities: vec![Capability::Iam],
        }
    }
}

/// Result of describing a stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackDescription {
    pub name: String,
    pub stack_id: Option<String>,
    pub status: Option<String>,
    pub status_reason: Option<String>,
}

/// Parameter declared by a validated template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParameter {
    pub key: String,
    pub default_value: Option<String>,
    pub no_echo: bool,
    pub description: Option<String>,
}

/// Result of validating a template body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateValidation {
    pub description: Option<String>,
    pub parameters: Vec<TemplateParameter>,
    pub capabilities: Vec<String>,
    pub capabilities_reason: Option<String>,
}

/// Result of a create or update call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackChange {
    pub stack_id: Option<String>,
}
