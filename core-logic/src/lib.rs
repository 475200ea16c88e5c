//! # Core Logic - Shared Utilities for Campaign Framework
//!
//! This crate provides shared utilities used across all campaign implementations.
//! It includes identity generation, proxy handling, configuration, and more.
//!
//! ## Modules
//!
//! - [`config`] - Configuration structures for campaign setup
//! - [`error`] - Typed error handling with thiserror
//! - [`traits`] - Core trait definitions
//! - [`utils`] - Utility modules (wallet generation, proxy normalization)

// Module declarations - internal modules marked pub(crate)
pub mod config;
pub mod error;
pub mod traits;
pub(crate) mod utils;

// Selective exports - only public API types
pub use config::{HttpConfig, PacingConfig};
pub use error::{ApiError, ConfigError, CoreError, ProxyError, WalletError};
pub use traits::{Campaign, CampaignStats, Task, TaskResult};

// Utils are pub(crate) - only export specific public utilities
pub use utils::{
    setup_logger, CampaignSupervisor, Identity, ProxyEndpoint, ProxyManager, WalletGenerator,
};
