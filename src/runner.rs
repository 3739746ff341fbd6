// src/runner.rs
use std::io::Write;

use tracing::debug;

use crate::{
    cartridge::CartridgeRecord,
    config::Settings,
    core::net,
    error::Result,
    notify::{self, Mailer, Notice},
    report::format_report,
    specs::cartridges,
    threshold::{Threshold, select_low},
};

/// What a run does with the result. `Debug` wins when both flags are set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportMode {
    /// Print to stdout, never mail.
    Debug,
    /// Always mail the full status report.
    Status,
    /// Mail only when something is low.
    Alert,
}

impl ReportMode {
    pub fn from_flags(debug: bool, status: bool) -> Self {
        match (debug, status) {
            (true, _) => ReportMode::Debug,
            (false, true) => ReportMode::Status,
            (false, false) => ReportMode::Alert,
        }
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    StatusSent,
    AlertSent,
    /// Alert mode with nothing low: no mail, no output.
    AllClear,
}

/// Parsed page plus the low subset.
#[derive(Clone, Debug, PartialEq)]
pub struct Check {
    pub records: Vec<CartridgeRecord>,
    pub low: Vec<CartridgeRecord>,
}

impl Check {
    /// Extract and filter an already fetched status page.
    pub fn evaluate(html_doc: &str, threshold: &Threshold) -> Result<Self> {
        let records = cartridges::extract(html_doc)?;
        let low = select_low(&records, threshold)?;
        debug!(total = records.len(), low = low.len(), threshold = threshold.as_str(), "levels checked");
        Ok(Self { records, low })
    }

    pub fn status_report(&self) -> String {
        format_report(&self.records)
    }

    pub fn low_report(&self) -> String {
        format_report(&self.low)
    }
}

/// Fetch, check and report. The single entry point for one invocation.
pub fn run(settings: &Settings, mode: ReportMode, mailer: &dyn Mailer, out: &mut dyn Write) -> Result<Outcome> {
    let html_doc = net::http_get(&settings.url)?;
    let check = Check::evaluate(&html_doc, &settings.threshold)?;
    report(&check, mode, settings, mailer, out)
}

/// Act on a finished check according to `mode`.
pub fn report(
    check: &Check,
    mode: ReportMode,
    settings: &Settings,
    mailer: &dyn Mailer,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let status = check.status_report();
    match mode {
        ReportMode::Debug => {
            write!(out, "{status}")?;
            let t = &settings.threshold;
            if check.low.is_empty() {
                writeln!(out, "\nNo cartridges at or below {} ({}).", t.as_str(), t.compare())?;
            } else {
                writeln!(out, "\nAt or below {} ({}):", t.as_str(), t.compare())?;
                write!(out, "{}", check.low_report())?;
            }
            Ok(Outcome::Printed)
        }
        ReportMode::Status => {
            let mail = settings.mail()?;
            notify::dispatch(mailer, Notice::Status { status: &status, link: &settings.url }, &mail)?;
            Ok(Outcome::StatusSent)
        }
        ReportMode::Alert if check.low.is_empty() => {
            debug!("nothing low, no alert");
            Ok(Outcome::AllClear)
        }
        ReportMode::Alert => {
            let mail = settings.mail()?;
            let low = check.low_report();
            notify::dispatch(mailer, Notice::Alert { low: &low, status: &status }, &mail)?;
            Ok(Outcome::AlertSent)
        }
    }
}
