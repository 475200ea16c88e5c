use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Default, Clone)]
pub struct CampaignStats {
    pub success: u64,
    pub failed: u64,
}

#[async_trait]
pub trait Campaign: Send + Sync {
    /// Starts the campaign loop. Implementations must honor the
    /// cancellation token between identities and during pacing sleeps,
    /// leaving already-recorded results intact.
    async fn start(
        &self,
        cancellation_token: tokio_util::sync::CancellationToken,
    ) -> Result<CampaignStats>;
}

#[derive(Debug, Clone)]
pub struct TaskResult {
    pub success: bool,
    pub message: String,
    pub points: Option<u64>,
}

#[async_trait]
pub trait Task<Ctx>: Send + Sync {
    /// Returns the name of the task
    fn name(&self) -> &str;

    /// Executes the task
    async fn run(&self, ctx: Ctx) -> Result<TaskResult>;
}
