use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub processor: ProcessorConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProcessorConfig {
    #[serde(default = "default_processor_url")]
    pub base_url: String,
    #[serde(default)]
    pub publishable_key: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    #[serde(default = "default_token_path")]
    pub token_path: PathBuf,
}

fn default_backend_url() -> String {
    "http://localhost:8080/E-Insurance".to_string()
}

fn default_processor_url() -> String {
    "https://api.stripe.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_token_path() -> PathBuf {
    PathBuf::from(".einsurance/auth_token")
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            base_url: default_processor_url(),
            publishable_key: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config/settings").required(false))
            // Override with environment variables (prefix: APP)
            // Example: APP_BACKEND__BASE_URL=http://localhost:8080/E-Insurance
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }
}
