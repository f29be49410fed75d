use crate::commands::print_response;
use cfn_cloud::{StackChange, StackProvider};
use cfn_core::Stack;

pub async fn update(stack: &Stack, provider: &dyn StackProvider) -> anyhow::Result<StackChange> {
    let request = stack.prepare_request()?;
    Ok(provider.update_stack(&request).await?)
}

pub async fn handle(stack: &Stack, provider: &dyn StackProvider) -> anyhow::Result<()> {
    let response = update(stack, provider).await?;
    print_response(&response)
}
