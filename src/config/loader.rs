//! Load settings from the environment and resolve the resource registry.

use crate::config::resolved::ResourceRegistry;
use crate::config::types::{ProxyConfig, ResourceSpec, RewriteRuleConfig};
use crate::config::validate;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

fn parse_var<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match raw.filter(|s| !s.trim().is_empty()) {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|e| ConfigError::Load(format!("{}={}: {}", name, s, e))),
    }
}

impl ProxyConfig {
    /// Read settings from the process environment. Call `dotenvy::dotenv()`
    /// first if a `.env` file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ProxyConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("BACKEND_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(ConfigError::Load(format!(
                "BACKEND_URL must be an http(s) URL, got {}",
                backend_url
            )));
        }
        let listen_addr = parse_var::<SocketAddr>(
            "LISTEN_ADDR",
            lookup("LISTEN_ADDR"),
            SocketAddr::from(([0, 0, 0, 0], 9000)),
        )?;
        let timeout = parse_var("BACKEND_TIMEOUT_SECS", lookup("BACKEND_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)?;
        let request_body_limit =
            parse_var("REQUEST_BODY_LIMIT", lookup("REQUEST_BODY_LIMIT"), DEFAULT_BODY_LIMIT)?;
        Ok(ProxyConfig {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            listen_addr,
            backend_timeout: Duration::from_secs(timeout),
            request_body_limit,
            rewrites_path: lookup("REWRITES_PATH").filter(|s| !s.trim().is_empty()),
        })
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 9000)),
            backend_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            request_body_limit: DEFAULT_BODY_LIMIT,
            rewrites_path: None,
        }
    }
}

/// Validate resource specs and build the runtime registry.
pub fn resolve(specs: Vec<ResourceSpec>) -> Result<ResourceRegistry, ConfigError> {
    validate(&specs)?;
    Ok(ResourceRegistry::from_specs(specs))
}

/// Read extra rewrite rules from a JSON array file.
pub async fn load_rewrites_from_path(path: &str) -> Result<Vec<RewriteRuleConfig>, ConfigError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path, e)))?;
    serde_json::from_str(&raw).map_err(|e| ConfigError::Load(format!("{}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_resources;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ProxyConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
        assert_eq!(config.backend_timeout, Duration::from_secs(30));
        assert_eq!(config.request_body_limit, DEFAULT_BODY_LIMIT);
    }

    #[test]
    fn values_are_parsed_and_trailing_slash_dropped() {
        let config = ProxyConfig::from_lookup(env(&[
            ("BACKEND_URL", "http://backend:8080/api/"),
            ("LISTEN_ADDR", "127.0.0.1:7000"),
            ("BACKEND_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.backend_url, "http://backend:8080/api");
        assert_eq!(config.listen_addr.port(), 7000);
        assert_eq!(config.backend_timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_values_are_load_errors() {
        let err = ProxyConfig::from_lookup(env(&[("BACKEND_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Load(m) if m.starts_with("BACKEND_TIMEOUT_SECS")));
        let err = ProxyConfig::from_lookup(env(&[("BACKEND_URL", "backend:8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn resolve_indexes_by_name() {
        let registry = resolve(default_resources()).unwrap();
        assert_eq!(registry.get("customer-groups").unwrap().backend_path, "customers/groups");
        assert!(registry.get("orders").is_none());
        assert_eq!(registry.len(), default_resources().len());
    }
}
