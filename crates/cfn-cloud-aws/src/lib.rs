//! AWS CloudFormation provider for cfn
//!
//! This crate implements the [`StackProvider`](cfn_cloud::StackProvider)
//! trait on top of `aws-sdk-cloudformation`.
//!
//! # Requirements
//!
//! - AWS credentials resolvable by the default provider chain
//!   (environment, shared profile, SSO, IMDS, ...)
//! - A region: `--region`, `AWS_DEFAULT_REGION`/`AWS_REGION`, or the profile
//!
//! # Example
//!
//! ```ignore
//! use cfn_cloud::StackProvider;
//! use cfn_cloud_aws::CloudFormationProvider;
//!
//! let provider = CloudFormationProvider::connect(Some("eu-west-1")).await;
//! let stack = provider.describe_stack("web-prod").await?;
//! println!("{:?}", stack.status);
//! ```

pub mod config;
pub mod error;
pub mod provider;

pub use config::load_sdk_config;
pub use provider::CloudFormationProvider;
