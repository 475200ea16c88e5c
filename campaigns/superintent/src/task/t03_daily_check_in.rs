use crate::task::{Task, TaskContext, TaskResult};
use anyhow::{Context, Result};
use async_trait::async_trait;

pub struct DailyCheckInTask;

#[async_trait]
impl Task<TaskContext> for DailyCheckInTask {
    fn name(&self) -> &str {
        "03_dailyCheckIn"
    }

    async fn run(&self, ctx: TaskContext) -> Result<TaskResult> {
        let already_done = ctx
            .api
            .has_checked_in_today()
            .await
            .context("Check-in status request failed")?;

        if already_done {
            return Ok(TaskResult {
                success: true,
                message: "Already checked in today".to_string(),
                points: None,
            });
        }

        let reward = ctx
            .api
            .perform_check_in()
            .await
            .context("Check-in request failed")?;

        if reward.success {
            Ok(TaskResult {
                success: true,
                message: format!("Check-in reward: +{} points", reward.points),
                points: Some(reward.points),
            })
        } else {
            Ok(TaskResult {
                success: false,
                message: "Check-in rejected".to_string(),
                points: None,
            })
        }
    }
}
