// src/error.rs
//! Error type shared by every stage of the ink check.
//!
//! Every variant is fatal: the binary reports it and exits non-zero.

use std::string::FromUtf8Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required configuration key is absent from both the environment and the env file.
    #[error("missing configuration value: {0}")]
    MissingVar(&'static str),

    #[error("invalid threshold {0:?}: expected a number")]
    InvalidThreshold(String),

    #[error("invalid threshold mode {0:?}: expected \"numeric\" or \"lexical\"")]
    InvalidMode(String),

    #[error("could not read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("status page is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    /// No `<caption>Cartridges</caption>` inside a `<table>`.
    #[error("cartridge table not found on status page")]
    TableNotFound,

    #[error("invalid CSS selector {0:?}")]
    Selector(String),

    #[error("cartridge {cartridge:?} has no ink level")]
    MissingLevel { cartridge: String },

    #[error("cartridge {cartridge:?} has unreadable ink level {level:?}")]
    InvalidLevel { cartridge: String, level: String },

    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("could not build mail message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
