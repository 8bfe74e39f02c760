use contracts::dashboards::capacity_ia::CapacityIaResponse;

use crate::config::ApiConfig;
use crate::shared::fetch::{self, FetchError};

pub async fn fetch_capacity_ia() -> Result<CapacityIaResponse, FetchError> {
    let url = ApiConfig::get().url("/dashboard/capacity/ia");
    fetch::get_json(&url).await
}
