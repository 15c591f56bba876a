use anyhow::{anyhow, Result};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub rpc: RpcConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RpcConfig {
    pub urls: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    /// Exact origins to allow. Empty means any origin is accepted.
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub supports_credentials: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                log_level: "info".to_string(),
            },
            rpc: RpcConfig { urls: Vec::new() },
            cors: CorsConfig {
                allowed_origins: Vec::new(),
                allowed_methods: vec!["GET".to_string()],
                allowed_headers: vec!["Accept".to_string(), "Content-Type".to_string()],
                supports_credentials: false,
            },
            rate_limit: RateLimitConfig {
                max_requests: 100,
                window_secs: 15 * 60,
            },
        }
    }
}

impl RpcConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.urls.is_empty() {
            return Err(anyhow!("RPC URL not configured"));
        }

        if self.urls.iter().any(|url| url.is_empty()) {
            return Err(anyhow!("RPC URL must not be empty"));
        }

        Ok(())
    }
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Try to load from config directory
        info!("Loading config from file");
        match Self::load_from_file("config/config.toml") {
            Ok(config) => {
                info!("Config loaded from file");
                Ok(config)
            }
            Err(e) => {
                error!("Failed to load config from file: {}", e);
                // Fall back to environment variables or defaults
                info!("Falling back to environment variables or defaults");
                Ok(Self::from_env())
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();

        // Override with environment variables if present
        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                config.server.port = port_num;
            }
        }

        if let Ok(log_level) = std::env::var("RUST_LOG") {
            config.server.log_level = log_level;
        }

        if let Ok(url) = std::env::var("RPC_URL") {
            config.rpc.urls = vec![url];
        }

        // A comma-separated list takes precedence over the single URL
        if let Ok(urls) = std::env::var("RPC_URLS") {
            config.rpc.urls = urls.split(',').map(|s| s.trim().to_string()).collect();
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors.allowed_origins =
                origins.split(',').map(|s| s.trim().to_string()).collect();
        }

        if let Ok(max) = std::env::var("RATE_LIMIT_MAX") {
            if let Ok(max_requests) = max.parse::<u32>() {
                config.rate_limit.max_requests = max_requests;
            }
        }

        if let Ok(window) = std::env::var("RATE_LIMIT_WINDOW_SECS") {
            if let Ok(window_secs) = window.parse::<u64>() {
                config.rate_limit.window_secs = window_secs;
            }
        }

        config
    }
}
