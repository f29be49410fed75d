use crate::commands::print_response;
use cfn_cloud::{StackProvider, TemplateValidation};
use cfn_core::Stack;

/// Generate, read the output back, and submit it for validation.
pub async fn validate(
    stack: &Stack,
    provider: &dyn StackProvider,
) -> anyhow::Result<TemplateValidation> {
    stack.generate()?;
    let generated = stack.load_generated()?;
    tracing::debug!(output = %generated.path.display(), "Validating generated template");

    Ok(provider.validate_template(&generated.content).await?)
}

pub async fn handle(stack: &Stack, provider: &dyn StackProvider) -> anyhow::Result<()> {
    let response = validate(stack, provider).await?;
    print_response(&response)
}
