use crate::campaign::CampaignResult;
use anyhow::{Context, Result};
use chrono::Local;
use core_logic::ProxyEndpoint;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;

/// Append-only output files for generated identities: a raw key list
/// for import tooling and a human-readable details file.
pub struct AccountLog {
    keys_path: String,
    details_path: String,
}

impl AccountLog {
    pub const KEYS_FILE: &'static str = "referral_accounts.txt";
    pub const DETAILS_FILE: &'static str = "referral_accounts_details.txt";

    pub fn new() -> Self {
        Self::at(Self::KEYS_FILE, Self::DETAILS_FILE)
    }

    pub fn at(keys_path: &str, details_path: &str) -> Self {
        Self {
            keys_path: keys_path.to_string(),
            details_path: details_path.to_string(),
        }
    }

    /// Appends the successfully onboarded identities from a run.
    /// Returns how many were written.
    pub fn append(&self, referral_code: &str, results: &[CampaignResult]) -> Result<usize> {
        let onboarded: Vec<&CampaignResult> = results.iter().filter(|r| r.success).collect();
        if onboarded.is_empty() {
            return Ok(0);
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

        let mut keys = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.keys_path)
            .with_context(|| format!("Failed to open {}", self.keys_path))?;
        writeln!(keys, "\nCreated on {} | Referral: {}", timestamp, referral_code)?;
        for account in &onboarded {
            writeln!(keys, "{}", account.private_key)?;
        }

        let mut details = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.details_path)
            .with_context(|| format!("Failed to open {}", self.details_path))?;
        let rule = "=".repeat(60);
        writeln!(
            details,
            "\n{}\nCreated: {}\nReferral: {}\n{}\n",
            rule, timestamp, referral_code, rule
        )?;
        for (idx, account) in onboarded.iter().enumerate() {
            writeln!(details, "Account #{}", idx + 1)?;
            writeln!(details, "Address: {}", account.address)?;
            writeln!(details, "Private Key: {}", account.private_key)?;
            if let Some(proxy) = &account.proxy {
                // Credentials stay out of the details file
                let shown = ProxyEndpoint::normalize(proxy)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|_| proxy.clone());
                writeln!(details, "Proxy: {}", shown)?;
            }
            writeln!(details, "{}", "-".repeat(60))?;
        }

        info!(
            "Saved {} accounts to {} and {}",
            onboarded.len(),
            self.keys_path,
            self.details_path
        );
        Ok(onboarded.len())
    }
}

impl Default for AccountLog {
    fn default() -> Self {
        Self::new()
    }
}
