//! SDK configuration loading

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Load the shared SDK configuration.
///
/// An explicit, non-empty `region` wins; otherwise the default region
/// provider chain is consulted.
pub async fn load_sdk_config(region: Option<&str>) -> SdkConfig {
    let explicit = region
        .filter(|r| !r.is_empty())
        .map(|r| Region::new(r.to_string()));

    if let Some(region) = &explicit {
        tracing::debug!(region = %region, "Using explicit AWS region");
    }

    let region_provider = RegionProviderChain::first_try(explicit).or_default_provider();

    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
