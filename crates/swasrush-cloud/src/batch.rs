//! Sequential purchase loop over all accounts

use crate::provider::InstanceProvider;
use crate::provision::{InstanceProvisioner, ProvisionResult};
use crate::result::ResultSet;
use swasrush_config::{AccountConfig, AccountRecord};

/// Attempt a purchase for every record, one after another.
///
/// Exactly one result is produced per record. A record that fails
/// validation is recorded as a failure and the loop moves on.
pub async fn provision_accounts<P, F>(records: &[AccountRecord], mut connect: F) -> ResultSet
where
    P: InstanceProvider,
    F: FnMut(&AccountConfig) -> P,
{
    let mut results = ResultSet::new();

    for (index, record) in records.iter().enumerate() {
        let result = match InstanceProvisioner::new(record, index, &mut connect) {
            Ok(provisioner) => provisioner.attempt_purchase().await,
            Err(e) => {
                tracing::error!("Skipping account: {}", e);
                ProvisionResult::invalid_config(&e)
            }
        };
        results.push(result);
    }

    tracing::info!(
        succeeded = results.successes().len(),
        failed = results.failures().len(),
        "All accounts processed"
    );
    results
}
