pub mod api_utils;
pub mod components;
pub mod hub;
pub mod icons;
pub mod page_frame;
pub mod routing;
