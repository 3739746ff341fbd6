// src/config/settings.rs
//! Run configuration, read once at startup.
//!
//! Values come from the process environment first and the `.env` file
//! second; nothing else in the crate reads the environment. Mail keys are
//! only checked when a mail is actually composed, so a `--debug` run needs
//! nothing but `URL`.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::consts::*;
use crate::error::{Error, Result};
use crate::threshold::{Compare, Threshold};

#[derive(Clone, Debug)]
pub struct Settings {
    pub url: String,
    pub threshold: Threshold,
    mail_from: Option<String>,
    mail_to: Option<String>,
    mail_server: Option<String>,
}

/// Sender, recipients and relay for one outgoing mail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailSettings {
    pub from: String,
    pub to: Vec<String>,
    pub server: String,
}

impl Settings {
    /// Build from any key lookup. Empty values count as missing.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let url = value(KEY_URL).ok_or(Error::MissingVar(KEY_URL))?;
        let compare = match value(KEY_THRESHOLD_MODE) {
            Some(mode) => mode.parse()?,
            None => Compare::default(),
        };
        let raw = value(KEY_THRESHOLD).unwrap_or_else(|| s!(DEFAULT_THRESHOLD));
        let threshold = Threshold::new(raw, compare)?;

        Ok(Self {
            url,
            threshold,
            mail_from: value(KEY_MAIL_FROM),
            mail_to: value(KEY_MAIL_TO),
            mail_server: value(KEY_MAIL_SERVER),
        })
    }

    /// Process environment layered over the env file.
    ///
    /// `env_file` given: it must exist. Otherwise `.env` is looked up beside
    /// the executable, then in the working directory, and may be absent.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let file_vars = match env_file {
            Some(path) => read_env_file(path)?,
            None => {
                let path = resource_path(ENV_FILE);
                if path.is_file() { read_env_file(&path)? } else { HashMap::new() }
            }
        };
        Self::from_lookup(|key| env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Mail settings, or the first missing key.
    pub fn mail(&self) -> Result<MailSettings> {
        let from = self.mail_from.clone().ok_or(Error::MissingVar(KEY_MAIL_FROM))?;
        let server = self.mail_server.clone().ok_or(Error::MissingVar(KEY_MAIL_SERVER))?;
        let to = split_recipients(self.mail_to.as_deref().unwrap_or(""));
        if to.is_empty() {
            return Err(Error::MissingVar(KEY_MAIL_TO));
        }
        Ok(MailSettings { from, to, server })
    }
}

/// Comma-separated addresses, trimmed, blanks dropped.
pub fn split_recipients(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect()
}

/// Where a bundled resource lives: beside the executable when packaged,
/// otherwise relative to the working directory.
pub fn resource_path(name: &str) -> PathBuf {
    let bundled = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(name)));
    match bundled {
        Some(path) if path.is_file() => path,
        _ => PathBuf::from(name),
    }
}

/// Parse a dotenv file into a map without touching the process environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    debug!(path = %path.display(), "reading env file");
    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        vars.insert(key, value);
    }
    Ok(vars)
}
