use contracts::planning::board::PlanningBoardResponse;

use crate::config::ApiConfig;
use crate::shared::fetch::{self, FetchError};

/// Fetch the planning projection for one material.
///
/// The backend clamps `horizonte_semanas` to 1..=12; the UI only
/// offers values inside that range.
pub async fn fetch_board(
    material: String,
    horizonte_semanas: u32,
) -> Result<PlanningBoardResponse, FetchError> {
    let base = ApiConfig::get().url(&format!("/planning/board/{}", material));
    let url = fetch::url_with_query(
        &base,
        &[("horizonte_semanas", &horizonte_semanas.to_string())],
    );
    fetch::get_json(&url).await
}
