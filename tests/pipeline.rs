// tests/pipeline.rs
//
// Mode dispatch end to end, with a recording mailer in place of SMTP.
//
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use check_ink::config::Settings;
use check_ink::config::consts::{ALERT_SUBJECT, STATUS_SUBJECT};
use check_ink::notify::{Email, Mailer};
use check_ink::runner::{Check, Outcome, ReportMode, report};
use check_ink::{Error, Result};

#[derive(Default)]
struct RecordingMailer {
    sent: RefCell<Vec<(String, Email)>>,
}

impl Mailer for RecordingMailer {
    fn send(&self, relay: &str, email: &Email) -> Result<()> {
        self.sent.borrow_mut().push((relay.to_string(), email.clone()));
        Ok(())
    }
}

fn fixture(name: &str) -> String {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests/fixtures");
    p.push(name);
    std::fs::read_to_string(&p).unwrap()
}

fn settings(extra: &[(&str, &str)]) -> Settings {
    let mut vars: HashMap<&str, &str> = HashMap::from([
        ("URL", "http://plotter.local/hp/device/webAccess/index.htm?content=supplies"),
        ("THRESHOLD", "11"),
        ("MAIL_FROM", "plotter@example.com"),
        ("MAIL_TO", "ops@example.com, facilities@example.com"),
        ("MAIL_SERVER", "smtp.example.com"),
    ]);
    vars.extend(extra.iter().copied());
    Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap()
}

fn check(page: &str, cfg: &Settings) -> Check {
    Check::evaluate(&fixture(page), &cfg.threshold).unwrap()
}

#[test]
fn debug_prints_and_never_mails() {
    let cfg = settings(&[]);
    let mailer = RecordingMailer::default();
    let mut out = Vec::new();

    let outcome = report(&check("ink_status.html", &cfg), ReportMode::Debug, &cfg, &mailer, &mut out).unwrap();

    assert_eq!(outcome, Outcome::Printed);
    assert!(mailer.sent.borrow().is_empty());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Matte Black"));
    assert!(text.contains("At or below 11 (numeric):"));
}

#[test]
fn debug_needs_no_mail_settings() {
    let cfg = Settings::from_lookup(|key| (key == "URL").then(|| "http://plotter.local/".to_string())).unwrap();
    let mailer = RecordingMailer::default();
    let mut out = Vec::new();

    let outcome = report(&check("ink_status.html", &cfg), ReportMode::Debug, &cfg, &mailer, &mut out).unwrap();
    assert_eq!(outcome, Outcome::Printed);
}

#[test]
fn alert_goes_out_when_something_is_low() {
    let cfg = settings(&[]);
    let mailer = RecordingMailer::default();

    let outcome = report(&check("ink_status.html", &cfg), ReportMode::Alert, &cfg, &mailer, &mut Vec::new()).unwrap();

    assert_eq!(outcome, Outcome::AlertSent);
    let sent = mailer.sent.borrow();
    assert_eq!(sent.len(), 1);
    let (relay, email) = &sent[0];
    assert_eq!(relay, "smtp.example.com");
    assert_eq!(email.subject, ALERT_SUBJECT);
    assert_eq!(email.to, ["ops@example.com", "facilities@example.com"]);
    assert!(email.html.contains("Matte Black"));
    assert!(email.html.contains("Photo Black"));
}

#[test]
fn alert_stays_silent_when_nothing_is_low() {
    let cfg = settings(&[("THRESHOLD", "5")]);
    let mailer = RecordingMailer::default();
    let mut out = Vec::new();

    let outcome = report(&check("ink_status.html", &cfg), ReportMode::Alert, &cfg, &mailer, &mut out).unwrap();

    assert_eq!(outcome, Outcome::AllClear);
    assert!(mailer.sent.borrow().is_empty());
    assert!(out.is_empty());
}

#[test]
fn empty_table_sends_no_alert() {
    let cfg = settings(&[]);
    let mailer = RecordingMailer::default();

    let outcome = report(&check("empty_table.html", &cfg), ReportMode::Alert, &cfg, &mailer, &mut Vec::new()).unwrap();

    assert_eq!(outcome, Outcome::AllClear);
    assert!(mailer.sent.borrow().is_empty());
}

#[test]
fn status_mails_even_with_nothing_low() {
    let cfg = settings(&[("THRESHOLD", "5")]);
    let mailer = RecordingMailer::default();

    let outcome = report(&check("ink_status.html", &cfg), ReportMode::Status, &cfg, &mailer, &mut Vec::new()).unwrap();

    assert_eq!(outcome, Outcome::StatusSent);
    let sent = mailer.sent.borrow();
    assert_eq!(sent.len(), 1);
    let email = &sent[0].1;
    assert_eq!(email.subject, STATUS_SUBJECT);
    assert_ne!(email.subject, ALERT_SUBJECT);
    assert!(email.html.contains(&cfg.url));
}

#[test]
fn lexical_mode_changes_what_counts_as_low() {
    let cfg = settings(&[("THRESHOLD_MODE", "lexical")]);
    let low: Vec<String> = check("ink_status.html", &cfg).low.into_iter().map(|r| r.cartridge).collect();
    assert_eq!(low, ["Magenta", "Yellow"]);
}

#[test]
fn missing_mail_settings_abort_the_alert() {
    let cfg = Settings::from_lookup(|key| match key {
        "URL" => Some("http://plotter.local/".to_string()),
        "THRESHOLD" => Some("50".to_string()),
        _ => None,
    })
    .unwrap();
    let mailer = RecordingMailer::default();

    let err = report(&check("ink_status.html", &cfg), ReportMode::Alert, &cfg, &mailer, &mut Vec::new()).unwrap_err();

    assert!(matches!(err, Error::MissingVar("MAIL_FROM")));
    assert!(mailer.sent.borrow().is_empty());
}

#[test]
fn low_row_without_end_tags_still_alerts() {
    let cfg = settings(&[]);
    let mailer = RecordingMailer::default();

    let outcome =
        report(&check("implied_end_tags.html", &cfg), ReportMode::Alert, &cfg, &mailer, &mut Vec::new()).unwrap();

    assert_eq!(outcome, Outcome::AlertSent);
    let sent = mailer.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1.html.contains("C1234A"));
}
