use crate::task::{Task, TaskContext, TaskResult};
use anyhow::{Context, Result};
use async_trait::async_trait;

pub struct BindReferralTask;

#[async_trait]
impl Task<TaskContext> for BindReferralTask {
    fn name(&self) -> &str {
        "02_bindReferral"
    }

    async fn run(&self, ctx: TaskContext) -> Result<TaskResult> {
        let bound = ctx
            .api
            .bind_referral(&ctx.referral_code)
            .await
            .context("Referral bind request failed")?;

        let message = if bound {
            "Referral bound successfully".to_string()
        } else {
            "Referral binding rejected".to_string()
        };

        Ok(TaskResult {
            success: bound,
            message,
            points: None,
        })
    }
}
