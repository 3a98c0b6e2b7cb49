//! Where the assistant service lives.
//!
//! Resolution order: `MEDASSIST_API_BASE` from the environment (native builds
//! load `.env` first), then the bundled `assets/config.env`, then
//! [`DEFAULT_API_BASE`].

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use url::Url;

/// Bundled config for targets without a filesystem `.env` (web, mobile)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const API_BASE_VAR: &str = "MEDASSIST_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

static BUNDLED_PAIRS: Lazy<Vec<(String, String)>> = Lazy::new(|| parse_env_lines(BUNDLED_CONFIG));

fn parse_env_lines(source: &str) -> Vec<(String, String)> {
    dotenvy::from_read_iter(source.as_bytes())
        .filter_map(|item| match item {
            Ok(pair) => Some(pair),
            Err(err) => {
                tracing::warn!(%err, "skipping malformed config line");
                None
            }
        })
        .collect()
}

fn bundled_value(key: &str) -> Option<String> {
    BUNDLED_PAIRS
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Endpoint addresses of the assistant service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base: Url,
    ask: Url,
    logs: Url,
}

impl ApiConfig {
    pub fn new(base: &str) -> Result<Self> {
        let mut base = Url::parse(base.trim()).with_context(|| format!("invalid API base {base:?}"))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("API base {base} cannot carry a path");
        }
        // join() replaces the last segment unless the path is a directory
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let ask = base.join("ask").context("building /ask endpoint")?;
        let logs = base.join("logs").context("building /logs endpoint")?;
        Ok(Self { base, ask, logs })
    }

    /// Resolves the base address from the process environment and bundled config.
    pub fn load() -> Self {
        Self::resolve(std::env::var(API_BASE_VAR).ok())
    }

    /// Like [`ApiConfig::load`] with an explicit environment override. A bad
    /// value is logged and the next source is tried.
    pub fn resolve(env_override: Option<String>) -> Self {
        let candidates = env_override
            .into_iter()
            .chain(bundled_value(API_BASE_VAR));
        for candidate in candidates {
            match Self::new(&candidate) {
                Ok(config) => return config,
                Err(err) => tracing::warn!(error = %err, "ignoring API base"),
            }
        }
        Self::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn ask_url(&self) -> &Url {
        &self.ask
    }

    pub fn logs_url(&self) -> &Url {
        &self.logs
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base = Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL");
        Self {
            ask: base.join("ask").expect("static path"),
            logs: base.join("logs").expect("static path"),
            base,
        }
    }
}
