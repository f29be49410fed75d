//! cfn core
//!
//! Resolves stack files by the environment/region cascade, renders
//! templates and writes the canonical JSON output that gets submitted to
//! CloudFormation.

pub mod error;
pub mod loader;
pub mod model;
pub mod output;
pub mod project;
pub mod resolver;
pub mod settings;
pub mod template;

pub use error::{CoreError, Result};
pub use loader::{LoadedFile, load_first_existing, load_stack_config};
pub use model::StackConfig;
pub use output::{to_canonical_string, write_document};
pub use project::{ProjectLayout, Stack};
pub use resolver::{CONFIG_EXTENSION, NameCascade, OUTPUT_EXTENSION, resolve_candidates};
pub use settings::{REGION_ENV, Settings};
pub use template::{TemplateRenderer, render};
