//! swasrush cloud abstraction
//!
//! Provider-independent half of a purchase run: the provider trait, the
//! per-account provisioning attempt, and the success/failure partition.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                swasrush CLI                   │
//! └─────────────────┬─────────────────────────────┘
//!                   │ provision_accounts()
//! ┌─────────────────▼─────────────────────────────┐
//! │               swasrush-cloud                  │
//! │  InstanceProvisioner ──► trait InstanceProvider│
//! │  ResultSet (successes / failures)             │
//! └─────────────────┬─────────────────────────────┘
//!                   │
//!         ┌─────────▼─────────┐
//!         │ aliyun-swas client│
//!         └───────────────────┘
//! ```

pub mod batch;
pub mod error;
pub mod provider;
pub mod provision;
pub mod result;

#[cfg(test)]
mod testing;

// Re-exports
pub use batch::provision_accounts;
pub use error::{NO_DIAGNOSTIC, ProviderError, Result};
pub use provider::{CreateInstancesRequest, InstanceProvider};
pub use provision::{
    InstanceProvisioner, ProvisionResult, TIME_FORMAT, current_utc_time, format_instance_ids,
};
pub use result::ResultSet;
