//! Alibaba Cloud Simple Application Server (SWAS) provider for swasrush
//!
//! This crate implements the `InstanceProvider` trait for the SWAS
//! OpenAPI, so that swasrush can purchase lightweight servers.
//!
//! # Features
//!
//! - `CreateInstances` with static AccessKey credentials
//! - RPC signature (HMAC-SHA1) without any vendor SDK
//! - Vendor error documents translated into `ProviderError`, keeping the
//!   `Recommend` field as the diagnostic hint
//!
//! # Example
//!
//! ```ignore
//! use swasrush_cloud::{CreateInstancesRequest, InstanceProvider};
//! use swasrush_cloud_aliyun::SwasClient;
//!
//! let client = SwasClient::new("LTAI...", "secret", "cn-hongkong");
//! let ids = client.create_instances(&request).await?;
//! ```

pub mod client;
pub mod error;
pub mod signer;

pub use client::{API_VERSION, CreateInstancesResponse, SwasClient, endpoint_for_region};
pub use error::{AliyunError, Result};
