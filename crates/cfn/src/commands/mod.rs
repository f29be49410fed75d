pub mod create;
pub mod delete;
pub mod exists;
pub mod generate;
pub mod update;
pub mod validate;

use serde::Serialize;

/// Print a provider response on stdout
pub(crate) fn print_response<T: Serialize>(response: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
