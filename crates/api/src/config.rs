//! Server configuration, read from `SHOPFRONT_*` environment variables.

use serde::Deserialize;

use shopfront_products::{DEFAULT_LOCAL_COUNT, DEFAULT_REMOTE_COUNT};

pub const ADDR_ENV: &str = "SHOPFRONT_ADDR";
pub const LOCAL_COUNT_ENV: &str = "SHOPFRONT_LOCAL_COUNT";
pub const REMOTE_COUNT_ENV: &str = "SHOPFRONT_REMOTE_COUNT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listen address.
    pub addr: String,
    /// Size of the locally generated catalog segment.
    pub local_count: usize,
    /// Size of the segment served by `/api/products`.
    pub remote_count: usize,
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            local_count: DEFAULT_LOCAL_COUNT,
            remote_count: DEFAULT_REMOTE_COUNT,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (env, test maps).
    ///
    /// Unparsable counts fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let addr = lookup(ADDR_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(default_addr);
        let local_count = parse_count(&lookup, LOCAL_COUNT_ENV, DEFAULT_LOCAL_COUNT);
        let remote_count = parse_count(&lookup, REMOTE_COUNT_ENV, DEFAULT_REMOTE_COUNT);

        Self { addr, local_count, remote_count }
    }
}

fn parse_count(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default, "invalid count; using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ApiConfig::from_lookup(lookup_from(&[]));
        assert_eq!(cfg, ApiConfig::default());
        assert_eq!(cfg.addr, "0.0.0.0:8080");
        assert_eq!(cfg.local_count, 100);
        assert_eq!(cfg.remote_count, 24);
    }

    #[test]
    fn reads_all_keys() {
        let cfg = ApiConfig::from_lookup(lookup_from(&[
            (ADDR_ENV, "127.0.0.1:9000"),
            (LOCAL_COUNT_ENV, "10"),
            (REMOTE_COUNT_ENV, " 5 "),
        ]));
        assert_eq!(cfg.addr, "127.0.0.1:9000");
        assert_eq!(cfg.local_count, 10);
        assert_eq!(cfg.remote_count, 5);
    }

    #[test]
    fn invalid_counts_fall_back_to_defaults() {
        let cfg = ApiConfig::from_lookup(lookup_from(&[
            (LOCAL_COUNT_ENV, "lots"),
            (REMOTE_COUNT_ENV, "-3"),
        ]));
        assert_eq!(cfg.local_count, DEFAULT_LOCAL_COUNT);
        assert_eq!(cfg.remote_count, DEFAULT_REMOTE_COUNT);
    }

    #[test]
    fn blank_addr_falls_back_to_default() {
        let cfg = ApiConfig::from_lookup(lookup_from(&[(ADDR_ENV, "  ")]));
        assert_eq!(cfg.addr, "0.0.0.0:8080");
    }

    #[test]
    fn deserializes_with_missing_fields_defaulted() {
        let cfg: ApiConfig =
            serde_json::from_value(serde_json::json!({ "remote_count": 6 })).unwrap();
        assert_eq!(cfg.addr, "0.0.0.0:8080");
        assert_eq!(cfg.local_count, DEFAULT_LOCAL_COUNT);
        assert_eq!(cfg.remote_count, 6);
    }
}
