pub mod api;
pub mod demo;
pub mod ui;

pub use ui::PeggingPanel;
