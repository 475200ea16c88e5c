//! # Utilities Module
//!
//! Internal utility modules for the core-logic crate.
//! These modules are marked as `pub(crate)` to enforce API boundaries.

// Internal modules - not part of public API
pub(crate) mod logger;
pub(crate) mod proxy;
pub(crate) mod proxy_manager;
pub(crate) mod runner;
pub(crate) mod wallet_generator;

// Selective exports - only public utilities
pub use logger::setup_logger;
pub use proxy::ProxyEndpoint;
pub use proxy_manager::ProxyManager;
pub use runner::CampaignSupervisor;
pub use wallet_generator::{Identity, WalletGenerator};
