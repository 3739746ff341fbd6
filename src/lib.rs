// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cartridge;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod notify;
pub mod report;
pub mod runner;
pub mod specs;
pub mod threshold;

pub use cartridge::CartridgeRecord;
pub use error::{Error, Result};
