use std::time::Duration;

use drivetime_core::destination::{DestinationDirectory, Directory};
use reqwest::header::ACCEPT;
use thiserror::Error;
use tracing::debug;

use crate::kitchen::Kitchen;

pub const KITCHENS_API_URL: &str = "https://api.staging.clustertruck.com/api/kitchens";

const KITCHENS_API_VERSION: &str = "application/vnd.api.clustertruck.com; version=2";

#[derive(Debug, Error)]
pub enum KitchenApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

pub struct KitchenClientParams {
    pub api_url: String,
    pub timeout: Duration,
}

pub struct KitchenClient {
    params: KitchenClientParams,
    client: reqwest::Client,
}

impl KitchenClient {
    pub fn new(params: KitchenClientParams) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(params.timeout).build()?;

        Ok(Self { params, client })
    }

    pub async fn fetch_kitchens(&self) -> Result<Vec<Kitchen>, KitchenApiError> {
        let response = self
            .client
            .get(&self.params.api_url)
            .header(ACCEPT, KITCHENS_API_VERSION)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(KitchenApiError::Api { status, message });
        }

        let body = response.bytes().await?;
        let kitchens: Vec<Kitchen> = serde_json::from_slice(&body)?;

        debug!("KitchenApi: Fetched {} kitchens", kitchens.len());

        Ok(kitchens)
    }
}

impl DestinationDirectory for KitchenClient {
    async fn fetch_destinations(&self) -> anyhow::Result<Directory> {
        let kitchens = self.fetch_kitchens().await?;

        Ok(kitchens
            .into_iter()
            .map(|kitchen| (kitchen.id.clone(), kitchen.into()))
            .collect())
    }
}
