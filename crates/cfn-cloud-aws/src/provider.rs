//! CloudFormation provider implementation

use crate::config::load_sdk_config;
use crate::error::map_sdk_error;
use async_trait::async_trait;
use aws_sdk_cloudformation::Client;
use aws_sdk_cloudformation::types;
use cfn_cloud::{
    Capability, CloudError, StackChange, StackDescription, StackParameter, StackProvider,
    StackRequest, TemplateParameter, TemplateValidation,
};

/// AWS CloudFormation provider
pub struct CloudFormationProvider {
    client: Client,
    region: Option<String>,
}

impl CloudFormationProvider {
    /// Load the SDK configuration and build a client for `region`.
    pub async fn connect(region: Option<&str>) -> Self {
        let config = load_sdk_config(region).await;
        Self {
            client: Client::new(&config),
            region: config.region().map(|r| r.to_string()),
        }
    }

    /// Region the client resolved to, if any
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

fn to_sdk_parameters(parameters: &[StackParameter]) -> Vec<types::Parameter> {
    parameters
        .iter()
        .map(|p| {
            types::Parameter::builder()
                .parameter_key(&p.key)
                .parameter_value(&p.value)
                .use_previous_value(p.use_previous_value)
                .build()
        })
        .collect()
}

fn to_sdk_capabilities(capabilities: &[Capability]) -> Vec<types::Capability> {
    capabilities
        .iter()
        .map(|c| match c {
            Capability::Iam => types::Capability::CapabilityIam,
        })
        .collect()
}

#[async_trait]
impl StackProvider for CloudFormationProvider {
    fn name(&self) -> &str {
        "aws-cloudformation"
    }

    async fn describe_stack(&self, name: &str) -> cfn_cloud::Result<StackDescription> {
        tracing::debug!(stack = %name, "DescribeStacks");

        let output = self
            .client
            .describe_stacks()
            .stack_name(name)
            .send()
            .await
            .map_err(|e| map_sdk_error("DescribeStacks", Some(name), e))?;

        let stack = output
            .stacks()
            .first()
            .ok_or_else(|| CloudError::StackNotFound(name.to_string()))?;

        Ok(StackDescription {
            name: stack.stack_name().unwrap_or(name).to_string(),
            stack_id: stack.stack_id().map(str::to_string),
            status: stack.stack_status().map(|s| s.as_str().to_string()),
            status_reason: stack.stack_status_reason().map(str::to_string),
        })
    }

    async fn validate_template(&self, template_body: &str) -> cfn_cloud::Result<TemplateValidation> {
        tracing::debug!(body_size = template_body.len(), "ValidateTemplate");

        let output = self
            .client
            .validate_template()
            .template_body(template_body)
            .send()
            .await
            .map_err(|e| map_sdk_error("ValidateTemplate", None, e))?;

        let parameters = output
            .parameters()
            .iter()
            .map(|p| TemplateParameter {
                key: p.parameter_key().unwrap_or_default().to_string(),
                default_value: p.default_value().map(str::to_string),
                no_echo: p.no_echo().unwrap_or(false),
                description: p.description().map(str::to_string),
            })
            .collect();

        Ok(TemplateValidation {
            description: output.description().map(str::to_string),
            parameters,
            capabilities: output
                .capabilities()
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            capabilities_reason: output.capabilities_reason().map(str::to_string),
        })
    }

    async fn create_stack(&self, request: &StackRequest) -> cfn_cloud::Result<StackChange> {
        tracing::info!(
            stack = %request.name,
            parameters = request.parameters.len(),
            "CreateStack"
        );

        let output = self
            .client
            .create_stack()
            .stack_name(&request.name)
            .template_body(&request.template_body)
            .set_parameters(Some(to_sdk_parameters(&request.parameters)))
            .set_capabilities(Some(to_sdk_capabilities(&request.capabilities)))
            .send()
            .await
            .map_err(|e| map_sdk_error("CreateStack", Some(&request.name), e))?;

        Ok(StackChange {
            stack_id: output.stack_id().map(str::to_string),
        })
    }

    async fn update_stack(&self, request: &StackRequest) -> cfn_cloud::Result<StackChange> {
        tracing::info!(
            stack = %request.name,
            parameters = request.parameters.len(),
            "UpdateStack"
        );

        let output = self
            .client
            .update_stack()
            .stack_name(&request.name)
            .template_body(&request.template_body)
            .use_previous_template(false)
            .set_parameters(Some(to_sdk_parameters(&request.parameters)))
            .set_capabilities(Some(to_sdk_capabilities(&request.capabilities)))
            .send()
            .await
            .map_err(|e| map_sdk_error("UpdateStack", Some(&request.name), e))?;

        Ok(StackChange {
            stack_id: output.stack_id().map(str::to_string),
        })
    }

    async fn delete_stack(&self, name: &str) -> cfn_cloud::Result<()> {
        tracing::info!(stack = %name, "DeleteStack");

        self.client
            .delete_stack()
            .stack_name(name)
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteStack", Some(name), e))?;

        Ok(())
    }
}
