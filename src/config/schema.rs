//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the SPA host.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::pages::Page;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SpaConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Route table, evaluated top to bottom.
    pub routes: Vec<RouteConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    pub security: SecurityConfig,
}

impl Default for SpaConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            routes: default_routes(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging/metrics.
    pub name: String,

    /// Path pattern. `None` makes this the unconditional fallback.
    #[serde(default)]
    pub path: Option<String>,

    /// Match the whole path instead of a prefix.
    #[serde(default)]
    pub exact: bool,

    /// Case-sensitive comparison.
    #[serde(default)]
    pub sensitive: bool,

    /// Page rendered on match.
    pub page: Page,
}

impl RouteConfig {
    pub fn exact(name: &str, path: &str, page: Page) -> Self {
        Self {
            name: name.to_string(),
            path: Some(path.to_string()),
            exact: true,
            sensitive: false,
            page,
        }
    }

    pub fn prefix(name: &str, path: &str, page: Page) -> Self {
        Self {
            name: name.to_string(),
            path: Some(path.to_string()),
            exact: false,
            sensitive: false,
            page,
        }
    }

    pub fn fallback(name: &str, page: Page) -> Self {
        Self {
            name: name.to_string(),
            path: None,
            exact: false,
            sensitive: false,
            page,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.path.is_none()
    }
}

/// The application's route table.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::exact("home", "/", Page::Home),
        RouteConfig::prefix("animals", "/animals", Page::AnimalManagement),
        RouteConfig::prefix("scoring", "/scoring", Page::Scoring),
        RouteConfig::prefix("dashboard", "/dashboard", Page::Dashboard),
        RouteConfig::fallback("not_found", Page::NotFound),
    ]
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Response hardening.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add nosniff / frame / referrer headers to every response.
    pub enable_headers: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self { enable_headers: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config: SpaConfig = toml::from_str("").unwrap();
        assert_eq!(config.routes, default_routes());
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert!(config.security.enable_headers);
    }

    #[test]
    fn test_routes_from_toml() {
        let config: SpaConfig = toml::from_str(
            r#"
            [[routes]]
            name = "home"
            path = "/"
            exact = true
            page = "home"

            [[routes]]
            name = "animals"
            path = "/Animals"
            sensitive = true
            page = "animal_management"

            [[routes]]
            name = "not_found"
            page = "not_found"
            "#,
        )
        .unwrap();

        assert_eq!(config.routes.len(), 3);
        assert!(config.routes[0].exact);
        assert!(config.routes[1].sensitive);
        assert_eq!(config.routes[1].page, Page::AnimalManagement);
        assert!(config.routes[2].is_fallback());
    }

    #[test]
    fn test_unknown_page_rejected() {
        let result: Result<SpaConfig, _> = toml::from_str(
            r#"
            [[routes]]
            name = "x"
            page = "settings"
            "#,
        );
        assert!(result.is_err());
    }
}
