//! Human-readable purchase report

use swasrush_cloud::{ProvisionResult, ResultSet, format_instance_ids};

pub const REPORT_TITLE: &str = "Aliyun SWAS flash purchase";

/// Placeholder when no account succeeded
pub const NO_SUCCESS: &str = "no successful provisioning";

/// Placeholder when no account failed
pub const NO_FAILURE: &str = "no failed provisioning";

/// Rendered report: a fixed title and a two-block body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub body: String,
}

impl Report {
    pub fn render(results: &ResultSet) -> Self {
        let body = format!(
            "{}\n\n{}",
            success_block(results.successes()),
            failure_block(results.failures())
        );
        Self {
            title: REPORT_TITLE.to_string(),
            body,
        }
    }
}

fn success_block(results: &[ProvisionResult]) -> String {
    if results.is_empty() {
        return NO_SUCCESS.to_string();
    }
    let lines: Vec<String> = results
        .iter()
        .map(|r| {
            format!(
                "{} - InstanceIds: {} (time: {})",
                r.account_name(),
                format_instance_ids(r.instance_ids()),
                r.time()
            )
        })
        .collect();
    format!("Successful accounts:\n{}", lines.join("\n"))
}

fn failure_block(results: &[ProvisionResult]) -> String {
    if results.is_empty() {
        return NO_FAILURE.to_string();
    }
    let lines: Vec<String> = results
        .iter()
        .map(|r| {
            format!(
                "{} - Error: {} (time: {})",
                r.account_name(),
                r.message(),
                r.time()
            )
        })
        .collect();
    format!("Failed accounts:\n{}", lines.join("\n"))
}
