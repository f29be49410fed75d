//! cfn Cloud Provider Abstraction
//!
//! This crate defines the seam between the stack tooling and the
//! CloudFormation control plane. The orchestration layer only talks to
//! [`StackProvider`]; the AWS SDK implementation lives in `cfn-cloud-aws`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                     cfn CLI                      │
//! │        (exists/generate/validate/create/...)     │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                  cfn-cloud                       │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │          Provider Abstraction             │   │
//! │  │  trait StackProvider { ... }              │   │
//! │  └──────────────────────────────────────────┘   │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//!           ┌───────▼────────┐
//!           │ cfn-cloud-aws  │
//!           │ CloudFormation │
//!           └────────────────┘
//! ```

pub mod error;
pub mod provider;
pub mod stack;

// Re-exports
pub use error::{CloudError, Result};
pub use provider::StackProvider;
pub use stack::{
    Capability, StackChange, StackDescription, StackParameter, StackRequest, TemplateParameter,
    TemplateValidation,
};
