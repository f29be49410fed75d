use crate::commands::print_response;
use cfn_cloud::{StackChange, StackProvider};
use cfn_core::Stack;

pub async fn create(stack: &Stack, provider: &dyn StackProvider) -> anyhow::Result<StackChange> {
    let request = stack.prepare_request()?;
    Ok(provider.create_stack(&request).await?)
}

pub async fn handle(stack: &Stack, provider: &dyn StackProvider) -> anyhow::Result<()> {
    let response = create(stack, provider).await?;
    print_response(&response)
}
