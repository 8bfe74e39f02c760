pub mod components;
pub mod controller;
pub mod fetch;
pub mod format;
pub mod icons;
pub mod panel;
pub mod validator;
