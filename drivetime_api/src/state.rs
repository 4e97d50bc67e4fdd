use drivetime_core::drive_time_service::DriveTimeService;
use drivetime_directions::google_directions_api::{
    GoogleDirectionsClient, GoogleDirectionsClientParams,
};
use drivetime_kitchens::kitchen_client::{KitchenClient, KitchenClientParams};

use crate::config::Config;

pub struct AppState {
    pub access_key: String,
    pub drive_time: DriveTimeService<KitchenClient, GoogleDirectionsClient>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let kitchens = KitchenClient::new(KitchenClientParams {
            api_url: config.kitchens_api_url.clone(),
            timeout: config.request_timeout,
        })?;

        let directions = GoogleDirectionsClient::new(GoogleDirectionsClientParams {
            api_key: config.directions_api_key.clone(),
            api_url: config.directions_api_url.clone(),
            timeout: config.request_timeout,
        })?;

        Ok(Self {
            access_key: config.access_key.clone(),
            drive_time: DriveTimeService::new(kitchens, directions),
        })
    }
}
