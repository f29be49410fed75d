use cfn_cloud::StackProvider;
use cfn_core::Stack;
use colored::Colorize;

/// Whether the stack exists; "stack not found" is `false`, anything else is an error.
pub async fn stack_exists(stack: &Stack, provider: &dyn StackProvider) -> cfn_cloud::Result<bool> {
    match provider.describe_stack(stack.name()).await {
        Ok(description) => {
            tracing::debug!(status = ?description.status, "Stack described");
            Ok(true)
        }
        Err(e) if e.is_stack_not_found() => {
            tracing::debug!(stack = %stack.name(), "Stack not found");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Status line printed by `cfn exists`
fn status_message(exists: bool) -> &'static str {
    if exists {
        "stack exists"
    } else {
        "stack does not exist"
    }
}

pub async fn handle(stack: &Stack, provider: &dyn StackProvider) -> anyhow::Result<()> {
    let exists = stack_exists(stack, provider).await?;
    let message = status_message(exists);

    if exists {
        println!("{}", message.green());
    } else {
        println!("{}", message.yellow());
    }

    Ok(())
}
