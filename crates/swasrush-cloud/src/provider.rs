//! Instance provider trait definition

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use swasrush_config::AccountConfig;

/// Instance provider abstraction trait
///
/// A provider is bound to one account's credentials and region. It issues
/// exactly one remote call per `create_instances` and never retries.
#[async_trait]
pub trait InstanceProvider: Send + Sync {
    /// Returns the provider name (e.g., "aliyun-swas")
    fn name(&self) -> &str;

    /// Create instances and return their identifiers
    async fn create_instances(&self, request: &CreateInstancesRequest) -> Result<Vec<String>>;
}

#[async_trait]
impl<P: InstanceProvider + ?Sized> InstanceProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn create_instances(&self, request: &CreateInstancesRequest) -> Result<Vec<String>> {
        (**self).create_instances(request).await
    }
}

/// Parameters of a purchase call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInstancesRequest {
    pub region_id: String,
    pub image_id: String,
    pub plan_id: String,
    pub period: i64,
    pub auto_renew: bool,
}

impl From<&AccountConfig> for CreateInstancesRequest {
    fn from(account: &AccountConfig) -> Self {
        Self {
            region_id: account.region_id.clone(),
            image_id: account.image_id.clone(),
            plan_id: account.plan_id.clone(),
            period: account.period,
            auto_renew: account.auto_renew,
        }
    }
}
