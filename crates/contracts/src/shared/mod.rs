pub mod config;
pub mod form;
pub mod format;
pub mod navigation;
