use crate::client::MissionApi;
use core_logic::PacingConfig;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub mod t01_validate_referral;
pub mod t02_bind_referral;
pub mod t03_daily_check_in;
pub mod t04_fetch_stats;

pub use self::t01_validate_referral::ValidateReferralTask;
pub use self::t02_bind_referral::BindReferralTask;
pub use self::t03_daily_check_in::DailyCheckInTask;
pub use self::t04_fetch_stats::FetchStatsTask;

pub use core_logic::traits::{Task, TaskResult};

#[derive(Clone)]
pub struct TaskContext {
    pub api: Arc<dyn MissionApi>,
    pub referral_code: String,
}

// Trait alias
pub type MissionTask = dyn Task<TaskContext> + Send + Sync;

#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step: String,
    pub success: bool,
    pub detail: String,
    pub points: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct SequenceReport {
    pub outcomes: Vec<StepOutcome>,
    /// Both referral gates passed. Follow-up steps never affect this.
    pub onboarded: bool,
}

/// Ordered onboarding steps for one authenticated identity.
///
/// Gate tasks must all succeed, in order, before any follow-up runs;
/// a failed gate short-circuits everything after it. Follow-ups are
/// best-effort telemetry, independent of each other's failure.
pub struct OnboardingSequence {
    gates: Vec<Box<MissionTask>>,
    follow_ups: Vec<Box<MissionTask>>,
}

impl OnboardingSequence {
    pub fn standard() -> Self {
        Self {
            gates: vec![Box::new(ValidateReferralTask), Box::new(BindReferralTask)],
            follow_ups: vec![Box::new(DailyCheckInTask), Box::new(FetchStatsTask)],
        }
    }

    pub async fn run(
        &self,
        ctx: TaskContext,
        pacing: &PacingConfig,
        token: &CancellationToken,
    ) -> SequenceReport {
        let mut report = SequenceReport::default();

        for task in &self.gates {
            let outcome = run_step(task.as_ref(), ctx.clone()).await;
            let passed = outcome.success;
            report.outcomes.push(outcome);
            if !passed {
                return report;
            }
            if !pace(pacing, token).await {
                return report;
            }
        }
        report.onboarded = true;

        for task in &self.follow_ups {
            let outcome = run_step(task.as_ref(), ctx.clone()).await;
            report.outcomes.push(outcome);
            if !pace(pacing, token).await {
                break;
            }
        }
        report
    }
}

async fn run_step(task: &MissionTask, ctx: TaskContext) -> StepOutcome {
    match task.run(ctx).await {
        Ok(result) => {
            if result.success {
                info!(
                    target: "campaign_result",
                    "Success [{}] {}",
                    task.name(),
                    result.message
                );
            } else {
                warn!(
                    target: "campaign_result",
                    "Failed [{}] {}",
                    task.name(),
                    result.message
                );
            }
            StepOutcome {
                step: task.name().to_string(),
                success: result.success,
                detail: result.message,
                points: result.points,
            }
        }
        Err(e) => {
            warn!(target: "campaign_result", "Failed [{}] {:#}", task.name(), e);
            StepOutcome {
                step: task.name().to_string(),
                success: false,
                detail: format!("{:#}", e),
                points: None,
            }
        }
    }
}

// Returns false when cancelled during the pacing sleep.
async fn pace(pacing: &PacingConfig, token: &CancellationToken) -> bool {
    let delay = pacing.step_delay();
    if delay.is_zero() {
        return !token.is_cancelled();
    }
    tokio::select! {
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}
