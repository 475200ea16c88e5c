use crate::auth::{login, AuthConfig};
use crate::client::ClientFactory;
use crate::config::SuperintentConfig;
use crate::task::{OnboardingSequence, TaskContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::Colorize;
use core_logic::{
    Campaign, CampaignStats, Identity, PacingConfig, ProxyEndpoint, WalletGenerator,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// What one campaign iteration produced. `success` reflects the
/// referral gates only; check-in and stats are telemetry.
#[derive(Debug, Clone)]
pub struct CampaignResult {
    pub address: String,
    pub private_key: String,
    pub proxy: Option<String>,
    pub success: bool,
}

pub struct ReferralCampaign {
    referral_code: String,
    count: u64,
    proxies: Vec<String>,
    auth: AuthConfig,
    pacing: PacingConfig,
    factory: Arc<dyn ClientFactory>,
    sequence: OnboardingSequence,
    results: Mutex<Vec<CampaignResult>>,
}

impl ReferralCampaign {
    pub fn new(
        config: &SuperintentConfig,
        referral_code: String,
        count: u64,
        proxies: Vec<String>,
        factory: Arc<dyn ClientFactory>,
    ) -> Self {
        Self {
            referral_code,
            count,
            proxies,
            auth: config.to_auth_config(),
            pacing: config.to_pacing_config(),
            factory,
            sequence: OnboardingSequence::standard(),
            results: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of recorded per-identity results, for persistence by
    /// the caller.
    pub fn results(&self) -> Vec<CampaignResult> {
        self.results.lock().expect("results mutex poisoned").clone()
    }

    fn record(&self, identity: &Identity, proxy: Option<String>, success: bool) {
        self.results
            .lock()
            .expect("results mutex poisoned")
            .push(CampaignResult {
                address: identity.address.clone(),
                private_key: identity.private_key.clone(),
                proxy,
                success,
            });
    }

    /// Round-robin proxy selection. A malformed entry degrades that
    /// iteration to "no proxy" - a soft failure, never fatal.
    fn proxy_for(&self, index: u64) -> (Option<String>, Option<ProxyEndpoint>) {
        if self.proxies.is_empty() {
            return (None, None);
        }
        let raw = self.proxies[(index as usize) % self.proxies.len()].clone();
        match ProxyEndpoint::normalize(&raw) {
            Ok(endpoint) => (Some(raw), Some(endpoint)),
            Err(e) => {
                warn!("Invalid proxy format, continuing without proxy: {}", e);
                (Some(raw), None)
            }
        }
    }

    // Returns false when cancelled during the sleep.
    async fn pace(&self, token: &CancellationToken, delay: Duration) -> bool {
        if delay.is_zero() {
            return !token.is_cancelled();
        }
        tokio::select! {
            _ = token.cancelled() => false,
            _ = sleep(delay) => true,
        }
    }
}

#[async_trait]
impl Campaign for ReferralCampaign {
    async fn start(&self, token: CancellationToken) -> Result<CampaignStats> {
        let mut stats = CampaignStats::default();

        info!("Referral Code: {}", self.referral_code);
        info!("Target Referrals: {}", self.count);
        info!(
            "Proxy Mode: {}",
            if self.proxies.is_empty() {
                "Disabled"
            } else {
                "Enabled"
            }
        );
        if !self.proxies.is_empty() {
            info!("Total Proxies: {}", self.proxies.len());
        }

        for i in 0..self.count {
            if token.is_cancelled() {
                info!("Campaign stopping (cancelled).");
                break;
            }

            info!("Account #{}/{}", i + 1, self.count);

            let (raw_proxy, endpoint) = self.proxy_for(i);
            match &endpoint {
                Some(p) => info!("Proxy: {}", p),
                None => info!("Proxy: No Proxy"),
            }

            let identity = WalletGenerator::generate();
            info!("Wallet: {}", identity.short_address());

            if !self.pace(&token, self.pacing.step_delay()).await {
                info!("Campaign stopping (cancelled during sleep).");
                break;
            }

            let api = match self.factory.build(endpoint.as_ref()) {
                Ok(api) => api,
                Err(e) => {
                    warn!("Failed to build client: {:#}", e);
                    stats.failed += 1;
                    self.record(&identity, raw_proxy, false);
                    continue;
                }
            };

            info!("Processing: Login");
            if let Err(e) = login(api.as_ref(), &identity, &self.auth).await {
                warn!(
                    target: "campaign_result",
                    "{} [login] {:#}",
                    "Failed".red().bold(),
                    e
                );
                stats.failed += 1;
                self.record(&identity, raw_proxy, false);
                if i + 1 < self.count && !self.pace(&token, self.pacing.cycle_delay()).await {
                    info!("Campaign stopping (cancelled during sleep).");
                    break;
                }
                continue;
            }
            info!(
                target: "campaign_result",
                "{} [login] {}",
                "Success".green().bold(),
                identity.short_address()
            );

            if !self.pace(&token, self.pacing.step_delay()).await {
                info!("Campaign stopping (cancelled during sleep).");
                break;
            }

            let ctx = TaskContext {
                api,
                referral_code: self.referral_code.clone(),
            };
            let report = self.sequence.run(ctx, &self.pacing, &token).await;

            // Skip persisting the in-flight identity on interruption
            if token.is_cancelled() {
                info!("Campaign stopping (cancelled).");
                break;
            }

            if report.onboarded {
                stats.success += 1;
                info!("Account #{} completed!", i + 1);
            } else {
                stats.failed += 1;
            }
            self.record(&identity, raw_proxy, report.onboarded);

            if i + 1 < self.count && !self.pace(&token, self.pacing.cycle_delay()).await {
                info!("Campaign stopping (cancelled during sleep).");
                break;
            }
        }

        info!(
            "Process Complete | Success: {}/{}",
            stats.success, self.count
        );
        Ok(stats)
    }
}
