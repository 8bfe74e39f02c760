use contracts::dashboards::summary::DashboardSummary;

use crate::config::ApiConfig;
use crate::shared::fetch::{self, FetchError};

/// Fetch the overview KPIs.
///
/// The materials and orders tabs render other slices of this same
/// resource and reuse this call; each tab still issues its own
/// request so their view states stay independent.
pub async fn fetch_summary() -> Result<DashboardSummary, FetchError> {
    let url = ApiConfig::get().url("/dashboard/summary");
    fetch::get_json(&url).await
}
