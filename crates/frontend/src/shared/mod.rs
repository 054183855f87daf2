pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod icons;
