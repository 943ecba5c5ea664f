//! Portal configuration
//!
//! Read once at startup from environment variables. On the web build the
//! environment is empty, so every field takes its default.

use std::str::FromStr;

use crate::application::ActionSettings;

pub const BASE_URL_VAR: &str = "MGCP_BASE_URL";
pub const DIRECTOR_LABEL_VAR: &str = "MGCP_DIRECTOR_LABEL";
pub const REFRESH_DELAY_VAR: &str = "MGCP_REFRESH_DELAY_MS";
pub const NOTIFICATION_MS_VAR: &str = "MGCP_NOTIFICATION_MS";
pub const PAGE_PATH_VAR: &str = "MGCP_PAGE_PATH";
pub const CLIPBOARD_LINK_VAR: &str = "MGCP_CLIPBOARD_LINK";

/// Server origin used when none is configured
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
/// Same-origin requests in the browser
#[cfg(target_arch = "wasm32")]
pub const DEFAULT_BASE_URL: &str = "";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Server base URL all API paths are joined onto
    pub base_url: String,
    /// Actor label sent as `usuario_director`
    pub director_label: String,
    /// Delay between a success toast and the view refresh
    pub refresh_delay_ms: u64,
    /// Default toast display time
    pub notification_ms: u64,
    /// Initial route on desktop, where there is no address bar
    pub page_path: String,
    /// Desktop stand-in for the client link input
    pub clipboard_link: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        let actions = ActionSettings::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            director_label: actions.director_label,
            refresh_delay_ms: actions.refresh_delay_ms,
            notification_ms: actions.notification_ms,
            page_path: "/".to_string(),
            clipboard_link: None,
        }
    }
}

impl PortalConfig {
    /// Load from the process environment, using defaults for missing values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup(BASE_URL_VAR).unwrap_or(defaults.base_url),
            director_label: lookup(DIRECTOR_LABEL_VAR)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.director_label),
            refresh_delay_ms: parse_or(&lookup, REFRESH_DELAY_VAR, defaults.refresh_delay_ms),
            notification_ms: parse_or(&lookup, NOTIFICATION_MS_VAR, defaults.notification_ms),
            page_path: lookup(PAGE_PATH_VAR).unwrap_or(defaults.page_path),
            clipboard_link: lookup(CLIPBOARD_LINK_VAR).or(defaults.clipboard_link),
        }
    }

    pub fn action_settings(&self) -> ActionSettings {
        ActionSettings {
            director_label: self.director_label.clone(),
            refresh_delay_ms: self.refresh_delay_ms,
            notification_ms: self.notification_ms,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, fallback = %default, "Ignoring unparseable setting");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = PortalConfig::from_lookup(lookup(&[]));

        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.director_label, "Director ACME");
        assert_eq!(config.refresh_delay_ms, 1500);
        assert_eq!(config.notification_ms, 3000);
        assert_eq!(config.page_path, "/");
    }

    #[test]
    fn reads_overrides() {
        let config = PortalConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "https://portal.acme.cl"),
            (DIRECTOR_LABEL_VAR, "Gerencia"),
            (REFRESH_DELAY_VAR, " 250 "),
            (CLIPBOARD_LINK_VAR, "https://portal.acme.cl/cliente/propuesta/t"),
        ]));

        assert_eq!(config.base_url, "https://portal.acme.cl");
        assert_eq!(config.refresh_delay_ms, 250);
        assert!(config.clipboard_link.is_some());

        let settings = config.action_settings();
        assert_eq!(settings.director_label, "Gerencia");
        assert_eq!(settings.refresh_delay_ms, 250);
    }

    #[test]
    fn unparseable_numbers_fall_back() {
        let config = PortalConfig::from_lookup(lookup(&[(NOTIFICATION_MS_VAR, "tres mil")]));
        assert_eq!(config.notification_ms, 3000);
    }

    #[test]
    fn blank_director_label_falls_back() {
        let config = PortalConfig::from_lookup(lookup(&[(DIRECTOR_LABEL_VAR, "  ")]));
        assert_eq!(config.director_label, "Director ACME");
    }
}
