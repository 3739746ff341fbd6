// src/config/mod.rs

pub mod consts;
pub mod settings;

pub use settings::{MailSettings, Settings};
