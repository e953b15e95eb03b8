//! Generic hub: data hook, REST client and the dashboard views shared by
//! every entity

pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod detail;
pub mod form;
pub mod list;
pub mod wizard;

pub use config::{use_hub_config, HubConfig};
pub use dashboard::HubDashboard;
pub use data::{use_hub_data, DataSource, HubData};

/// Browser confirmation dialog; false outside a browser
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
