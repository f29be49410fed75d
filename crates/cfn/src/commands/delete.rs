use cfn_cloud::StackProvider;
use cfn_core::Stack;
use colored::Colorize;

pub async fn handle(stack: &Stack, provider: &dyn StackProvider) -> anyhow::Result<()> {
    provider.delete_stack(stack.name()).await?;
    println!("{} {}", "delete requested:".green(), stack.name());
    Ok(())
}
