//! Simple Application Server (SWAS) API client
//!
//! Direct OpenAPI implementation using static AccessKey authentication.
//! One HTTP request per call: no retry, no token refresh.

use crate::error::{AliyunError, Result};
use crate::signer::{self, SIGNATURE_METHOD, SIGNATURE_VERSION};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use swasrush_cloud::{CreateInstancesRequest, InstanceProvider, ProviderError};
use swasrush_config::AccountConfig;

/// SWAS OpenAPI version
pub const API_VERSION: &str = "2020-06-01";

const ENDPOINT_DOMAIN: &str = "aliyuncs.com";

/// `swas.<region_id>.aliyuncs.com`
pub fn endpoint_for_region(region_id: &str) -> String {
    format!("swas.{}.{}", region_id, ENDPOINT_DOMAIN)
}

/// SWAS client bound to one account
pub struct SwasClient {
    client: reqwest::Client,
    access_key_id: String,
    access_key_secret: String,
    base_url: String,
}

impl SwasClient {
    pub fn new(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
        region_id: &str,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_key_id: access_key_id.into(),
            access_key_secret: access_key_secret.into(),
            base_url: format!("https://{}", endpoint_for_region(region_id)),
        }
    }

    pub fn for_account(account: &AccountConfig) -> Self {
        Self::new(
            &account.access_key_id,
            &account.access_key_secret,
            &account.region_id,
        )
    }

    /// Point the client at a different base URL (e.g. a VPC endpoint)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the signed query for `action` with the given business parameters
    fn signed_query(&self, action: &str, params: BTreeMap<String, String>) -> Result<String> {
        let mut all = params;
        let common = [
            ("Action", action.to_string()),
            ("Version", API_VERSION.to_string()),
            ("Format", "JSON".to_string()),
            ("AccessKeyId", self.access_key_id.clone()),
            ("SignatureMethod", SIGNATURE_METHOD.to_string()),
            ("SignatureVersion", SIGNATURE_VERSION.to_string()),
            ("SignatureNonce", uuid::Uuid::new_v4().to_string()),
            (
                "Timestamp",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            ),
        ];
        for (key, value) in common {
            all.insert(key.to_string(), value);
        }
        signer::signed_query("GET", &self.access_key_secret, all)
    }

    /// Call an API action and decode the JSON response
    async fn call<T: DeserializeOwned>(
        &self,
        action: &str,
        params: BTreeMap<String, String>,
    ) -> Result<T> {
        let url = format!("{}/?{}", self.base_url, self.signed_query(action, params)?);

        tracing::debug!("Calling {} on {}", action, self.base_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(err) => AliyunError::Api {
                    code: err.code,
                    message: err.message,
                    recommend: err.recommend,
                    request_id: err.request_id,
                },
                Err(_) => AliyunError::UnexpectedResponse {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        tracing::debug!("{} response: {}", action, body);
        Ok(serde_json::from_str(&body)?)
    }

    /// CreateInstances: purchase instances of a plan
    pub async fn create(
        &self,
        request: &CreateInstancesRequest,
    ) -> Result<CreateInstancesResponse> {
        let params: BTreeMap<String, String> = [
            ("RegionId", request.region_id.clone()),
            ("ImageId", request.image_id.clone()),
            ("PlanId", request.plan_id.clone()),
            ("Period", request.period.to_string()),
            ("AutoRenew", request.auto_renew.to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let response: CreateInstancesResponse = self.call("CreateInstances", params).await?;
        tracing::info!(
            request_id = response.request_id.as_deref().unwrap_or("-"),
            "CreateInstances returned {} instance(s)",
            response.instance_ids.len()
        );
        Ok(response)
    }
}

#[async_trait]
impl InstanceProvider for SwasClient {
    fn name(&self) -> &str {
        "aliyun-swas"
    }

    async fn create_instances(
        &self,
        request: &CreateInstancesRequest,
    ) -> swasrush_cloud::Result<Vec<String>> {
        self.create(request)
            .await
            .map(|response| response.instance_ids)
            .map_err(ProviderError::from)
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInstancesResponse {
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,

    #[serde(rename = "InstanceIds", default)]
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "RequestId")]
    request_id: Option<String>,
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message")]
    message: String,
    #[serde(rename = "Recommend")]
    recommend: Option<String>,
}
