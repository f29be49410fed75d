use cfn_core::Stack;
use colored::Colorize;

pub fn handle(stack: &Stack) -> anyhow::Result<()> {
    let path = stack.generate()?;
    eprintln!("{} {}", "✓ generated".green(), path.display());
    Ok(())
}
