//! Per-account purchase attempt

use crate::provider::{CreateInstancesRequest, InstanceProvider};
use chrono::Utc;
use serde::Serialize;
use swasrush_config::{AccountConfig, AccountRecord, ConfigError};

/// Timestamp format used in results and reports
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Current wall-clock time in UTC, formatted with [`TIME_FORMAT`]
pub fn current_utc_time() -> String {
    Utc::now().format(TIME_FORMAT).to_string()
}

/// Render instance IDs as `['i-1', 'i-2']`
pub fn format_instance_ids(ids: &[String]) -> String {
    let quoted: Vec<String> = ids.iter().map(|id| format!("'{}'", id)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Outcome of one account's purchase attempt.
///
/// `success == true` always carries at least one instance ID, and a failure
/// never carries any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionResult {
    account_name: String,
    success: bool,
    message: String,
    instance_ids: Vec<String>,
    time: String,
}

impl ProvisionResult {
    /// Successful purchase. An empty ID list is recorded as a failure.
    pub fn succeeded(
        account_name: impl Into<String>,
        instance_ids: Vec<String>,
        time: impl Into<String>,
    ) -> Self {
        if instance_ids.is_empty() {
            return Self::failed(account_name, "provider returned no instance ids", time);
        }
        Self {
            account_name: account_name.into(),
            success: true,
            message: format!(
                "Purchase succeeded! InstanceIds: {}",
                format_instance_ids(&instance_ids)
            ),
            instance_ids,
            time: time.into(),
        }
    }

    pub fn failed(
        account_name: impl Into<String>,
        message: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            success: false,
            message: message.into(),
            instance_ids: Vec::new(),
            time: time.into(),
        }
    }

    /// Failure for an account whose record could not be validated
    pub fn invalid_config(error: &ConfigError) -> Self {
        Self::failed(error.account(), error.to_string(), current_utc_time())
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn instance_ids(&self) -> &[String] {
        &self.instance_ids
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}

/// Binds one account to a provider and attempts the purchase once
pub struct InstanceProvisioner<P> {
    account: AccountConfig,
    provider: P,
}

impl<P: InstanceProvider> InstanceProvisioner<P> {
    /// Validate the record, then build the provider with `connect`.
    ///
    /// `index` is the record's position in the config file and is only used
    /// to name accounts without an `account_name`.
    pub fn new<F>(record: &AccountRecord, index: usize, connect: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&AccountConfig) -> P,
    {
        let account = record.validate(index)?;
        let provider = connect(&account);
        Ok(Self::from_account(account, provider))
    }

    pub fn from_account(account: AccountConfig, provider: P) -> Self {
        Self { account, provider }
    }

    pub fn account(&self) -> &AccountConfig {
        &self.account
    }

    /// Issue the purchase call. Provider errors are folded into the result.
    pub async fn attempt_purchase(&self) -> ProvisionResult {
        let request = CreateInstancesRequest::from(&self.account);
        let name = &self.account.account_name;
        let time = current_utc_time();

        tracing::info!(
            account = %name,
            provider = self.provider.name(),
            region = %request.region_id,
            plan = %request.plan_id,
            "Attempting purchase"
        );

        match self.provider.create_instances(&request).await {
            Ok(instance_ids) => {
                let result = ProvisionResult::succeeded(name.as_str(), instance_ids, time);
                if result.is_success() {
                    tracing::info!(account = %name, "{}", result.message());
                } else {
                    tracing::error!(account = %name, "{}", result.message());
                }
                result
            }
            Err(e) => {
                let message = e.describe();
                tracing::error!(
                    account = %name,
                    code = e.code.as_deref().unwrap_or("-"),
                    "{}",
                    message
                );
                ProvisionResult::failed(name.as_str(), message, time)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::testing::FakeProvider;

    fn record(name: &str) -> AccountRecord {
        AccountRecord {
            account_name: Some(name.to_string()),
            access_key_id: Some("LTAI-test".to_string()),
            access_key_secret: Some("secret".to_string()),
            region_id: Some("cn-hongkong".to_string()),
            image_id: Some("img-1".to_string()),
            plan_id: Some("plan-1".to_string()),
            period: Some(1),
            auto_renew: Some(true),
        }
    }

    #[test]
    fn test_format_instance_ids() {
        assert_eq!(format_instance_ids(&[]), "[]");
        assert_eq!(
            format_instance_ids(&["i-001".to_string(), "i-002".to_string()]),
            "['i-001', 'i-002']"
        );
    }

    #[test]
    fn test_succeeded_with_no_ids_is_failure() {
        let result = ProvisionResult::succeeded("A", Vec::new(), "t");
        assert!(!result.is_success());
        assert!(result.instance_ids().is_empty());
    }

    #[test]
    fn test_current_utc_time_format() {
        let time = current_utc_time();
        assert!(time.ends_with(" UTC"));
        assert!(chrono::NaiveDateTime::parse_from_str(&time, TIME_FORMAT).is_ok());
    }

    #[test]
    fn test_new_fails_on_missing_region() {
        let mut r = record("A");
        r.region_id = None;

        let mut connected = false;
        let result = InstanceProvisioner::new(&r, 0, |_| {
            connected = true;
            FakeProvider::succeeding(vec!["i-001"])
        });

        let err = result.err().expect("construction should fail");
        assert!(err.to_string().contains("region_id"));
        assert!(!connected);
    }

    #[test]
    fn test_attempt_purchase_success() {
        let provisioner =
            InstanceProvisioner::new(&record("A"), 0, |_| FakeProvider::succeeding(vec!["i-001"]))
                .unwrap();

        let result = tokio_test::block_on(provisioner.attempt_purchase());

        assert!(result.is_success());
        assert_eq!(result.account_name(), "A");
        assert_eq!(result.instance_ids(), ["i-001".to_string()]);
        assert_eq!(result.message(), "Purchase succeeded! InstanceIds: ['i-001']");
    }

    #[tokio::test]
    async fn test_attempt_purchase_failure_is_swallowed() {
        let error = ProviderError::new("Quota exceeded")
            .with_code("QuotaExceed.Instance")
            .with_diagnostic("check your quota");
        let provisioner =
            InstanceProvisioner::new(&record("B"), 1, |_| FakeProvider::failing(error)).unwrap();

        let result = provisioner.attempt_purchase().await;

        assert!(!result.is_success());
        assert!(result.instance_ids().is_empty());
        assert_eq!(
            result.message(),
            "Purchase failed: Quota exceeded\nDiagnostic: check your quota"
        );
    }

    #[tokio::test]
    async fn test_attempt_purchase_passes_account_parameters() {
        let provider = FakeProvider::succeeding(vec!["i-9"]);
        let calls = provider.calls();
        let provisioner = InstanceProvisioner::new(&record("A"), 0, |_| provider).unwrap();

        provisioner.attempt_purchase().await;

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            CreateInstancesRequest {
                region_id: "cn-hongkong".to_string(),
                image_id: "img-1".to_string(),
                plan_id: "plan-1".to_string(),
                period: 1,
                auto_renew: true,
            }
        );
    }

    #[test]
    fn test_invalid_config_result() {
        let err = ConfigError::MissingField {
            account: "C".to_string(),
            field: "plan_id",
        };
        let result = ProvisionResult::invalid_config(&err);
        assert!(!result.is_success());
        assert_eq!(result.account_name(), "C");
        assert!(result.message().contains("plan_id"));
    }
}
