pub mod page_header;
pub mod severity_badge;
pub mod stat_card;
pub mod status_banner;

pub use page_header::PageHeader;
pub use severity_badge::SeverityBadge;
pub use stat_card::StatCard;
pub use status_banner::{EmptyNotice, ErrorBanner, LoadingIndicator};
