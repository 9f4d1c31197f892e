use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{EventType, RuntimeConfig};

use crate::config::parse_event_types;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub supported_event_types: Vec<String>,
    pub seed_path: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_page_limit: usize,
    pub max_page_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            supported_event_types: EventType::ALL
                .iter()
                .map(|event_type| event_type.as_str().to_string())
                .collect(),
            seed_path: None,
            max_body_bytes: 2 * 1024 * 1024,
            request_timeout_seconds: 15,
            default_page_limit: 100,
            max_page_limit: 1000,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("TNT_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml_str(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn normalize(&mut self) {
        if let Some(seed_path) = &self.seed_path {
            if seed_path.trim().is_empty() {
                self.seed_path = None;
            }
        }
        self.supported_event_types = self
            .supported_event_types
            .iter()
            .map(|item| item.trim().to_uppercase())
            .filter(|item| !item.is_empty())
            .collect();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if let Some(seed_path) = &self.seed_path {
            self.seed_path = Some(resolve_path(base, seed_path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        parse_event_types(&self.supported_event_types)?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.default_page_limit == 0 || self.default_page_limit > self.max_page_limit {
            return Err(anyhow!(
                "default_page_limit must be between 1 and max_page_limit ({})",
                self.max_page_limit
            ));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> Result<RuntimeConfig> {
        Ok(RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            supported_event_types: parse_event_types(&self.supported_event_types)?,
            seed_path: self.seed_path.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            default_page_limit: self.default_page_limit,
            max_page_limit: self.max_page_limit,
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("TNT_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("TNT_SUPPORTED_EVENT_TYPES") {
            self.supported_event_types = value.split(',').map(ToString::to_string).collect();
        }
        if let Ok(value) = env::var("TNT_SEED_PATH") {
            self.seed_path = Some(value);
        }
        if let Ok(value) = env::var("TNT_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("TNT_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("TNT_DEFAULT_PAGE_LIMIT") {
            self.default_page_limit = value.parse().unwrap_or(self.default_page_limit);
        }
        if let Ok(value) = env::var("TNT_MAX_PAGE_LIMIT") {
            self.max_page_limit = value.parse().unwrap_or(self.max_page_limit);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
