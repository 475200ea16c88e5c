use crate::task::{Task, TaskContext, TaskResult};
use anyhow::{Context, Result};
use async_trait::async_trait;

pub struct ValidateReferralTask;

#[async_trait]
impl Task<TaskContext> for ValidateReferralTask {
    fn name(&self) -> &str {
        "01_validateReferral"
    }

    async fn run(&self, ctx: TaskContext) -> Result<TaskResult> {
        let accepted = ctx
            .api
            .validate_referral(&ctx.referral_code)
            .await
            .context("Referral validation request failed")?;

        let message = if accepted {
            format!("Referral code {} accepted", ctx.referral_code)
        } else {
            format!("Referral code {} rejected", ctx.referral_code)
        };

        Ok(TaskResult {
            success: accepted,
            message,
            points: None,
        })
    }
}
