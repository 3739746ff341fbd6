// src/cli.rs
use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::error::Result;
use crate::notify::SmtpMailer;
use crate::runner::{self, Outcome, ReportMode};

/// Check plotter ink levels and email the admins.
///
/// Without flags an alert goes out only when a cartridge is at or below the
/// configured threshold.
#[derive(Debug, Parser)]
#[command(name = "check_ink", about, version)]
pub struct Cli {
    /// Show the status on stdout and send no email
    #[arg(short, long)]
    pub debug: bool,

    /// Always email the full status report
    #[arg(short, long)]
    pub status: bool,

    /// Read configuration from this file instead of `.env`
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

impl Cli {
    pub fn mode(&self) -> ReportMode {
        ReportMode::from_flags(self.debug, self.status)
    }
}

/// Stderr logging, `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

pub fn run(cli: &Cli) -> Result<Outcome> {
    let settings = Settings::load(cli.env_file.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner::run(&settings, cli.mode(), &SmtpMailer, &mut out)
}
