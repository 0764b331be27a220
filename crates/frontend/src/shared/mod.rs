pub mod components;
pub mod config;
pub mod date_utils;
pub mod form_controller;
pub mod icons;
pub mod toast;
