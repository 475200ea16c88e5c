use crate::auth::AuthConfig;
use anyhow::Result;
use config::{Config, File};
use core_logic::{HttpConfig, PacingConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SuperintentConfig {
    pub base_url: String,
    pub origin: String,
    pub siwe_domain: String,
    pub chain_id: u64,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub account_count: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub min_step_delay_ms: Option<u64>,
    pub max_step_delay_ms: Option<u64>,
    pub min_cycle_delay_ms: Option<u64>,
    pub max_cycle_delay_ms: Option<u64>,
}

impl SuperintentConfig {
    pub fn load(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path))
            .build()?;

        settings.try_deserialize().map_err(|e| anyhow::anyhow!(e))
    }

    pub fn to_pacing_config(&self) -> PacingConfig {
        let defaults = PacingConfig::default();
        PacingConfig {
            min_step_delay_ms: self.min_step_delay_ms.unwrap_or(defaults.min_step_delay_ms),
            max_step_delay_ms: self.max_step_delay_ms.unwrap_or(defaults.max_step_delay_ms),
            min_cycle_delay_ms: self.min_cycle_delay_ms.unwrap_or(defaults.min_cycle_delay_ms),
            max_cycle_delay_ms: self.max_cycle_delay_ms.unwrap_or(defaults.max_cycle_delay_ms),
        }
    }

    pub fn to_http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout_secs: self
                .request_timeout_secs
                .unwrap_or_else(|| HttpConfig::default().timeout_secs),
        }
    }

    pub fn to_auth_config(&self) -> AuthConfig {
        AuthConfig {
            domain: self.siwe_domain.clone(),
            uri: self.origin.clone(),
            chain_id: self.chain_id,
        }
    }
}
