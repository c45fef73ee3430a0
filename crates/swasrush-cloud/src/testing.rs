//! Test doubles for [`InstanceProvider`]

use crate::error::{ProviderError, Result};
use crate::provider::{CreateInstancesRequest, InstanceProvider};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Provider that answers every call with a canned outcome and records requests
pub struct FakeProvider {
    outcome: std::result::Result<Vec<String>, ProviderError>,
    calls: Arc<Mutex<Vec<CreateInstancesRequest>>>,
}

impl FakeProvider {
    pub fn succeeding(ids: Vec<&str>) -> Self {
        Self {
            outcome: Ok(ids.into_iter().map(str::to_string).collect()),
            calls: Arc::default(),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<CreateInstancesRequest>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl InstanceProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    async fn create_instances(&self, request: &CreateInstancesRequest) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}
