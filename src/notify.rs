// src/notify.rs
//! Mail composition and delivery.
//!
//! Two templates exist: the low-ink alert and the full status report. Both
//! go out as `multipart/alternative` with a plain-text placeholder; the
//! rendered reports live in the HTML part only.

use lettre::message::{Mailbox, MultiPart};
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::config::MailSettings;
use crate::config::consts::{ALERT_SUBJECT, PLAIN_PLACEHOLDER, SMTP_PORT, STATUS_SUBJECT};
use crate::error::Result;

/// An outgoing message, transport-agnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl Email {
    /// HTML mail with the standard plain-text placeholder and no recipients yet.
    #[must_use]
    pub fn new(from: impl Into<String>, subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: Vec::new(),
            subject: subject.into(),
            text: s!(PLAIN_PLACEHOLDER),
            html: html.into(),
        }
    }

    /// Adds a recipient.
    #[must_use]
    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.to.push(recipient.into());
        self
    }
}

/// Anything that can deliver an `Email` through a relay. Errors propagate; there is no retry.
pub trait Mailer {
    fn send(&self, relay: &str, email: &Email) -> Result<()>;
}

/// Plain SMTP (no TLS, no auth) to a `host` or `host:port` relay.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmtpMailer;

impl Mailer for SmtpMailer {
    fn send(&self, relay: &str, email: &Email) -> Result<()> {
        let mut builder = Message::builder()
            .from(email.from.parse::<Mailbox>()?)
            .subject(email.subject.as_str());
        for rcpt in &email.to {
            builder = builder.to(rcpt.parse::<Mailbox>()?);
        }
        let message = builder.multipart(MultiPart::alternative_plain_html(email.text.clone(), email.html.clone()))?;

        let (host, port) = split_relay(relay);
        let transport = SmtpTransport::builder_dangerous(host).port(port).build();
        transport.send(&message)?;
        info!(subject = %email.subject, recipients = email.to.len(), relay, "mail sent");
        Ok(())
    }
}

/// `host[:port]`, port defaulting to 25.
pub fn split_relay(relay: &str) -> (&str, u16) {
    relay
        .rsplit_once(':')
        .and_then(|(h, p)| p.parse::<u16>().ok().map(|p| (h, p)))
        .unwrap_or((relay, SMTP_PORT))
}

/// What to tell the admins.
#[derive(Clone, Copy, Debug)]
pub enum Notice<'a> {
    /// Some cartridges are low: the low report plus the full status.
    Alert { low: &'a str, status: &'a str },
    /// Scheduled full status with a link to the device.
    Status { status: &'a str, link: &'a str },
}

/// Build the mail for `notice`, one recipient per configured address.
pub fn compose(notice: Notice<'_>, mail: &MailSettings) -> Email {
    let (subject, html) = match notice {
        Notice::Alert { low, status } => (ALERT_SUBJECT, alert_html(low, status)),
        Notice::Status { status, link } => (STATUS_SUBJECT, status_html(status, link)),
    };
    mail.to
        .iter()
        .fold(Email::new(mail.from.as_str(), subject, html), |email, rcpt| email.to(rcpt.as_str()))
}

/// Compose and hand off to the transport.
pub fn dispatch(mailer: &dyn Mailer, notice: Notice<'_>, mail: &MailSettings) -> Result<()> {
    mailer.send(&mail.server, &compose(notice, mail))
}

fn alert_html(low: &str, status: &str) -> String {
    format!(
        "<html><body>\
         <p>The following plotter cartridges are at or below the reorder level:</p>\
         <pre>{}</pre>\
         <p>Current level of every cartridge:</p>\
         <pre>{}</pre>\
         </body></html>",
        escape_html(low),
        escape_html(status)
    )
}

fn status_html(status: &str, link: &str) -> String {
    let link = escape_html(link);
    format!(
        "<html><body>\
         <p>Scheduled plotter ink status report.</p>\
         <pre>{}</pre>\
         <p>Device web interface: <a href=\"{link}\">{link}</a></p>\
         </body></html>",
        escape_html(status)
    )
}

/// Escape text for HTML element and attribute content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
