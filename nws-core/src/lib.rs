//! Core library for the `nws` CLI.
//!
//! This crate defines:
//! - Alert query filters and their projection to query parameters
//! - A thin HTTP client for the NWS alerts API
//! - Typed models for active alerts and alert counts
//! - Plain-text report rendering
//!
//! It is used by `nws-cli`, but can also be reused by other binaries or services.

pub mod alerts;
pub mod client;
pub mod error;
pub mod model;
pub mod options;
pub mod report;

pub use client::{ClientConfig, NwsClient, ReqwestTransport, Transport};
pub use error::NwsError;
pub use model::{AlertCollection, AlertCountSummary, AlertFeature, AlertProperties};
pub use options::{AlertOptions, QueryParams};
pub use reqwest::StatusCode;
