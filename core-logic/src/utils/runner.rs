use crate::traits::{Campaign, CampaignStats};
use anyhow::Result;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub struct CampaignSupervisor;

impl CampaignSupervisor {
    /// Runs a campaign to completion, wiring Ctrl+C to a graceful stop.
    ///
    /// Cancellation leaves already-recorded results intact; the campaign
    /// skips the in-flight identity and returns its stats so far.
    pub async fn run(campaign: &dyn Campaign) -> Result<CampaignStats> {
        let token = CancellationToken::new();
        let cloned_token = token.clone();

        tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C. Initiating graceful shutdown...");
                    cloned_token.cancel();
                }
                Err(err) => {
                    error!("Unable to listen for shutdown signal: {}", err);
                }
            }
        });

        let start_time = std::time::Instant::now();
        let stats = campaign.start(token).await?;

        let total = stats.success + stats.failed;
        let rate = if total > 0 {
            (stats.success as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        info!(
            "Total Time: {:.1}s | Total Success: {} | Total Fail: {} | Success Rate: {:.2}%",
            start_time.elapsed().as_secs_f64(),
            stats.success,
            stats.failed,
            rate
        );

        Ok(stats)
    }
}
