use leptos::prelude::*;

use crate::shared::api_utils;

/// Runtime settings shared by every hub, provided through context
#[derive(Debug, Clone, PartialEq)]
pub struct HubConfig {
    /// Origin of the REST backend, e.g. "http://localhost:3000"
    pub api_base: String,
    /// Serve sample data when the backend cannot be reached
    pub mock_fallback: bool,
    pub search_debounce_ms: u32,
    /// Path prefix the hub application is mounted under
    pub mount_base: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            api_base: api_utils::api_base(),
            mock_fallback: cfg!(debug_assertions),
            search_debounce_ms: 300,
            mount_base: String::new(),
        }
    }
}

pub fn use_hub_config() -> HubConfig {
    use_context::<HubConfig>().unwrap_or_default()
}
