use contracts::pegging::ia_lite::PeggingIaLiteResponse;

use crate::config::ApiConfig;
use crate::shared::fetch::{self, FetchError};

pub async fn fetch_pegging(material: String) -> Result<PeggingIaLiteResponse, FetchError> {
    let base = ApiConfig::get().url("/pegging/ia-lite");
    let url = fetch::url_with_query(&base, &[("material", &material)]);
    fetch::get_json(&url).await
}
