//! Account records as written in the config file, and their validated form.

use crate::error::ConfigError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// One entry of the `accounts` list, exactly as it appears in the file.
///
/// Every field is optional here so that a missing key can be reported per
/// account instead of failing the whole file. String fields also take
/// numeric or boolean scalars (`image_id: 123456`) as their text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(default, deserialize_with = "scalar_string")]
    pub account_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub access_key_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub access_key_secret: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub region_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub image_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub plan_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_integer")]
    pub period: Option<i64>,
    pub auto_renew: Option<bool>,
}

impl AccountRecord {
    /// Name used in logs and reports; falls back to the 1-based position.
    pub fn display_name(&self, index: usize) -> String {
        match self.account_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("account-{}", index + 1),
        }
    }

    /// 必須キーを順に検査し、最初に欠けているキー名を返す
    pub fn validate(&self, index: usize) -> Result<AccountConfig, ConfigError> {
        let account = self.display_name(index);
        let missing = |field: &'static str| ConfigError::MissingField {
            account: account.clone(),
            field,
        };

        let access_key_id =
            required(&self.access_key_id).ok_or_else(|| missing("access_key_id"))?;
        let access_key_secret =
            required(&self.access_key_secret).ok_or_else(|| missing("access_key_secret"))?;
        let region_id = required(&self.region_id).ok_or_else(|| missing("region_id"))?;
        let image_id = required(&self.image_id).ok_or_else(|| missing("image_id"))?;
        let plan_id = required(&self.plan_id).ok_or_else(|| missing("plan_id"))?;
        let period = self.period.ok_or_else(|| missing("period"))?;
        let auto_renew = self.auto_renew.ok_or_else(|| missing("auto_renew"))?;

        Ok(AccountConfig {
            account_name: account.clone(),
            access_key_id,
            access_key_secret,
            region_id,
            image_id,
            plan_id,
            period,
            auto_renew,
        })
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(D::Error::custom("expected a string, number or boolean")),
    }
}

/// `period: 1` and `period: "1"` are the same
fn scalar_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected an integer, got {}", n))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected an integer, got '{}'", s))),
        Some(_) => Err(D::Error::custom("expected an integer")),
    }
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A fully validated account, immutable for the run.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountConfig {
    pub account_name: String,
    pub access_key_id: String,
    pub access_key_secret: String,
    pub region_id: String,
    pub image_id: String,
    pub plan_id: String,
    /// Subscription length in months
    pub period: i64,
    pub auto_renew: bool,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("account_name", &self.account_name)
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"***")
            .field("region_id", &self.region_id)
            .field("image_id", &self.image_id)
            .field("plan_id", &self.plan_id)
            .field("period", &self.period)
            .field("auto_renew", &self.auto_renew)
            .finish()
    }
}
