use superintent_project::accounts::AccountLog;
use superintent_project::campaign::ReferralCampaign;
use superintent_project::client::SuperintentClientFactory;
use superintent_project::config::SuperintentConfig;

use anyhow::Result;
use clap::Parser;
use core_logic::{setup_logger, CampaignSupervisor, ProxyManager};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "campaigns/superintent/config.toml")]
    config: String,
    /// Referral code to validate and bind (prompted if absent)
    #[arg(short, long)]
    referral_code: Option<String>,
    /// Number of identities to create (prompted if absent)
    #[arg(short = 'n', long)]
    count: Option<u64>,
    /// Use proxies.txt without prompting
    #[arg(long, conflicts_with = "no_proxy")]
    proxy: bool,
    /// Run without proxies without prompting
    #[arg(long)]
    no_proxy: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = setup_logger();
    // Keep guard alive for file logging
    std::mem::forget(_log_guard);
    dotenv().ok();

    let args = Args::parse();
    info!("Loading config from: {}", args.config);

    let config = match SuperintentConfig::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return Ok(());
        }
    };

    let referral_code = match args
        .referral_code
        .or_else(|| config.referral_code.clone())
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
    {
        Some(code) => code,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your referral code")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Referral code cannot be empty!")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(|code: String| code.trim().to_string())?,
    };

    let count = match args.count.or(config.account_count).filter(|n| *n > 0) {
        Some(n) => n,
        None => Input::<u64>::with_theme(&ColorfulTheme::default())
            .with_prompt("Number of referrals to create")
            .validate_with(|n: &u64| {
                if *n > 0 {
                    Ok(())
                } else {
                    Err("Please enter a positive number!")
                }
            })
            .interact_text()?,
    };

    let use_proxy = if args.proxy {
        true
    } else if args.no_proxy {
        false
    } else {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select mode")
            .items(&["Run with proxy", "Run without proxy"])
            .default(1)
            .interact()?;
        choice == 0
    };

    let proxies = if use_proxy {
        let pool = ProxyManager::load_proxies()?;
        if pool.is_empty() {
            warn!("No proxies available, running without proxy...");
        }
        pool
    } else {
        Vec::new()
    };

    info!("Starting process...");
    let factory = Arc::new(SuperintentClientFactory::new(config.clone()));
    let campaign = ReferralCampaign::new(&config, referral_code.clone(), count, proxies, factory);

    CampaignSupervisor::run(&campaign).await?;

    let results = campaign.results();
    AccountLog::new().append(&referral_code, &results)?;

    Ok(())
}
