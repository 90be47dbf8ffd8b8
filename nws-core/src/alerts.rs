use serde::de::DeserializeOwned;

use crate::{
    client::NwsClient,
    error::NwsError,
    model::{AlertCollection, AlertCountSummary},
    options::QueryParams,
};

pub const ACTIVE_ENDPOINT: &str = "active";
pub const ACTIVE_COUNT_ENDPOINT: &str = "active/count";

impl NwsClient {
    /// Fetch currently active alerts matching `params`.
    pub async fn active_alerts(&self, params: &QueryParams) -> Result<AlertCollection, NwsError> {
        let body = self.call_endpoint(ACTIVE_ENDPOINT, params).await?;
        decode(&body, "active alerts")
    }

    /// Fetch active alert counts. The endpoint takes no filters.
    pub async fn active_alert_count(&self) -> Result<AlertCountSummary, NwsError> {
        let body = self.call_endpoint(ACTIVE_COUNT_ENDPOINT, &QueryParams::new()).await?;
        decode(&body, "active alert count")
    }
}

fn decode<T: DeserializeOwned>(body: &[u8], payload: &'static str) -> Result<T, NwsError> {
    serde_json::from_slice(body).map_err(|source| NwsError::Decode { payload, source })
}
