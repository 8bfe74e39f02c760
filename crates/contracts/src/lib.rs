pub mod dashboards;
pub mod pegging;
pub mod planning;
pub mod shared;
