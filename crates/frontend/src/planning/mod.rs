pub mod api;
pub mod chart;
pub mod ui;

pub use ui::PlanningBoardPanel;
