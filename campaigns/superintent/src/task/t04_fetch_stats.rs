use crate::task::{Task, TaskContext, TaskResult};
use anyhow::{Context, Result};
use async_trait::async_trait;

pub struct FetchStatsTask;

#[async_trait]
impl Task<TaskContext> for FetchStatsTask {
    fn name(&self) -> &str {
        "04_fetchStats"
    }

    async fn run(&self, ctx: TaskContext) -> Result<TaskResult> {
        let total = ctx
            .api
            .fetch_stats()
            .await
            .context("Stats request failed")?;

        Ok(TaskResult {
            success: true,
            message: format!("Total points: {}", total),
            points: Some(total),
        })
    }
}
