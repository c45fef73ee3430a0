//! Success/failure partition of provisioning results

use crate::provision::ProvisionResult;
use serde::Serialize;

/// Results split by outcome, each side in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    successes: Vec<ProvisionResult>,
    failures: Vec<ProvisionResult>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stable partition by the `success` flag. No sorting, no deduplication.
    pub fn partition(results: impl IntoIterator<Item = ProvisionResult>) -> Self {
        let mut set = Self::new();
        for result in results {
            set.push(result);
        }
        set
    }

    pub fn push(&mut self, result: ProvisionResult) {
        if result.is_success() {
            self.successes.push(result);
        } else {
            self.failures.push(result);
        }
    }

    pub fn successes(&self) -> &[ProvisionResult] {
        &self.successes
    }

    pub fn failures(&self) -> &[ProvisionResult] {
        &self.failures
    }

    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn is_all_success(&self) -> bool {
        self.failures.is_empty()
    }
}
