//! # Core Error Types
//!
//! Centralized error definitions for the core-logic crate.
//! All errors implement `std::error::Error` and `std::fmt::Display`.

use thiserror::Error;

/// Unified error type for core-logic operations.
///
/// This enum wraps all specific error types and provides a unified
/// error interface for the application layer.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Config(ConfigError),

    #[error(transparent)]
    Proxy(ProxyError),

    #[error(transparent)]
    Wallet(WalletError),

    #[error(transparent)]
    Api(ApiError),

    #[error("Unknown error: {message}")]
    Unknown { message: String },
}

impl From<ConfigError> for CoreError {
    fn from(e: ConfigError) -> Self {
        CoreError::Config(e)
    }
}

impl From<ProxyError> for CoreError {
    fn from(e: ProxyError) -> Self {
        CoreError::Proxy(e)
    }
}

impl From<WalletError> for CoreError {
    fn from(e: WalletError) -> Self {
        CoreError::Wallet(e)
    }
}

impl From<ApiError> for CoreError {
    fn from(e: ApiError) -> Self {
        CoreError::Api(e)
    }
}

/// Configuration-related errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Missing required configuration field: '{field}'")]
    MissingField { field: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error reading {path}: {msg}")]
    IoError { path: String, msg: String },
}

/// Proxy string normalization errors.
///
/// These are soft failures: callers log a warning and continue without
/// a proxy instead of failing the identity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("Unrecognized proxy format: '{raw}'")]
    UnrecognizedFormat { raw: String },

    #[error("Invalid proxy port '{value}' in '{raw}'")]
    InvalidPort { raw: String, value: String },

    #[error("Unsupported proxy scheme '{scheme}'")]
    UnsupportedScheme { scheme: String },
}

/// Wallet and cryptographic operation errors
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    #[error("Invalid private key format: expected hex string")]
    InvalidKeyFormat,

    #[error("Private key too short: expected 64 hex chars, got {length}")]
    InvalidKeyLength { length: usize },

    #[error("Address derivation failed: {reason}")]
    DerivationFailed { reason: String },
}

/// HTTP API errors (network transport and protocol shape).
///
/// Server-side business rejections (`success: false` bodies) are NOT
/// errors; they surface as `false` return values at the call site.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Request timeout after {timeout_ms}ms to {endpoint}")]
    Timeout { timeout_ms: u64, endpoint: String },

    #[error("Connection failed to {endpoint}: {reason}")]
    ConnectionFailed { endpoint: String, reason: String },

    #[error("HTTP error {status_code} from {endpoint}")]
    HttpError { status_code: u16, endpoint: String },

    #[error("Missing field '{field}' in response from {endpoint}")]
    MissingField { field: String, endpoint: String },

    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}
