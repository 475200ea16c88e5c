use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub struct ProxyManager;

impl ProxyManager {
    const PROXY_FILE: &'static str = "proxies.txt";

    /// Loads raw proxy lines from proxies.txt.
    ///
    /// Lines are kept as-is; normalization happens per use so a bad
    /// entry degrades that iteration to "no proxy" instead of being
    /// dropped silently at load time.
    pub fn load_proxies() -> Result<Vec<String>> {
        Self::load_from(Self::PROXY_FILE)
    }

    pub fn load_from(path: &str) -> Result<Vec<String>> {
        let file = Path::new(path);
        if !file.exists() {
            warn!("{} not found. Running without proxies.", path);
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(file).with_context(|| format!("Failed to read {}", path))?;

        let proxies: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        info!("Loaded {} proxies from {}", proxies.len(), path);
        Ok(proxies)
    }
}
