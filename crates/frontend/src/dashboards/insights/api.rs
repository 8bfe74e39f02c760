use contracts::dashboards::insights::InsightsResponse;

use crate::config::ApiConfig;
use crate::shared::fetch::{self, FetchError};

pub async fn fetch_insights() -> Result<InsightsResponse, FetchError> {
    let url = ApiConfig::get().url("/dashboard/insights");
    fetch::get_json(&url).await
}
