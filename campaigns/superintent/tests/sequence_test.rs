use anyhow::Result;
use async_trait::async_trait;
use core_logic::PacingConfig;
use std::sync::{Arc, Mutex};
use superintent_project::client::{CheckInReward, MissionApi};
use superintent_project::task::{OnboardingSequence, SequenceReport, TaskContext};
use tokio_util::sync::CancellationToken;

/// Scriptable stand-in for the mission service, recording call order.
struct MockApi {
    calls: Mutex<Vec<&'static str>>,
    validate_ok: bool,
    bind_ok: bool,
    checked_in: bool,
    check_in_fails: bool,
    stats_fails: bool,
}

impl MockApi {
    fn passing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            validate_ok: true,
            bind_ok: true,
            checked_in: false,
            check_in_fails: false,
            stats_fails: false,
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn log(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MissionApi for MockApi {
    async fn fetch_nonce(&self) -> Result<String> {
        self.log("nonce");
        Ok("mock-nonce".to_string())
    }

    async fn sign_in(&self, _message: &str, _signature: &str) -> Result<()> {
        self.log("sign_in");
        Ok(())
    }

    async fn validate_referral(&self, _code: &str) -> Result<bool> {
        self.log("validate");
        Ok(self.validate_ok)
    }

    async fn bind_referral(&self, _code: &str) -> Result<bool> {
        self.log("bind");
        Ok(self.bind_ok)
    }

    async fn has_checked_in_today(&self) -> Result<bool> {
        self.log("status");
        Ok(self.checked_in)
    }

    async fn perform_check_in(&self) -> Result<CheckInReward> {
        self.log("check_in");
        if self.check_in_fails {
            anyhow::bail!("check-in endpoint down");
        }
        Ok(CheckInReward {
            success: true,
            points: 10,
        })
    }

    async fn fetch_stats(&self) -> Result<u64> {
        self.log("stats");
        if self.stats_fails {
            anyhow::bail!("stats endpoint down");
        }
        Ok(42)
    }
}

async fn run_sequence(api: Arc<MockApi>) -> SequenceReport {
    let ctx = TaskContext {
        api,
        referral_code: "ABC123".to_string(),
    };
    OnboardingSequence::standard()
        .run(ctx, &PacingConfig::none(), &CancellationToken::new())
        .await
}

#[tokio::test]
async fn failed_validate_short_circuits_everything() {
    let api = Arc::new(MockApi {
        validate_ok: false,
        ..MockApi::passing()
    });

    let report = run_sequence(api.clone()).await;

    assert_eq!(api.calls(), vec!["validate"]);
    assert!(!report.onboarded);
    assert_eq!(report.outcomes.len(), 1);
    assert!(!report.outcomes[0].success);
}

#[tokio::test]
async fn failed_bind_skips_follow_ups() {
    let api = Arc::new(MockApi {
        bind_ok: false,
        ..MockApi::passing()
    });

    let report = run_sequence(api.clone()).await;

    assert_eq!(api.calls(), vec!["validate", "bind"]);
    assert!(!report.onboarded);
    assert_eq!(report.outcomes.len(), 2);
}

#[tokio::test]
async fn full_pass_runs_all_steps_in_order() {
    let api = Arc::new(MockApi::passing());

    let report = run_sequence(api.clone()).await;

    assert_eq!(
        api.calls(),
        vec!["validate", "bind", "status", "check_in", "stats"]
    );
    assert!(report.onboarded);
    assert_eq!(report.outcomes.len(), 4);
    assert!(report.outcomes.iter().all(|o| o.success));
    // Check-in reward is reported
    let check_in = &report.outcomes[2];
    assert_eq!(check_in.points, Some(10));
}

#[tokio::test]
async fn already_checked_in_skips_the_check_in_post() {
    let api = Arc::new(MockApi {
        checked_in: true,
        ..MockApi::passing()
    });

    let report = run_sequence(api.clone()).await;

    let calls = api.calls();
    assert!(calls.contains(&"status"));
    assert!(!calls.contains(&"check_in"));
    assert!(calls.contains(&"stats"));
    assert!(report.onboarded);
}

#[tokio::test]
async fn stats_still_runs_when_check_in_fails() {
    let api = Arc::new(MockApi {
        check_in_fails: true,
        ..MockApi::passing()
    });

    let report = run_sequence(api.clone()).await;

    assert!(api.calls().contains(&"stats"));
    // Follow-up failure never affects the onboarded flag
    assert!(report.onboarded);
    let check_in = report
        .outcomes
        .iter()
        .find(|o| o.step == "03_dailyCheckIn")
        .unwrap();
    assert!(!check_in.success);
    let stats = report
        .outcomes
        .iter()
        .find(|o| o.step == "04_fetchStats")
        .unwrap();
    assert!(stats.success);
}

#[tokio::test]
async fn stats_failure_is_non_fatal() {
    let api = Arc::new(MockApi {
        stats_fails: true,
        ..MockApi::passing()
    });

    let report = run_sequence(api.clone()).await;

    assert!(report.onboarded);
    let stats = report
        .outcomes
        .iter()
        .find(|o| o.step == "04_fetchStats")
        .unwrap();
    assert!(!stats.success);
}
