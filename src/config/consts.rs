// src/config/consts.rs

// Configuration keys
pub const KEY_URL: &str = "URL";
pub const KEY_THRESHOLD: &str = "THRESHOLD";
pub const KEY_THRESHOLD_MODE: &str = "THRESHOLD_MODE";
pub const KEY_MAIL_FROM: &str = "MAIL_FROM";
pub const KEY_MAIL_TO: &str = "MAIL_TO";
pub const KEY_MAIL_SERVER: &str = "MAIL_SERVER";

// Env file
pub const ENV_FILE: &str = ".env";

// Threshold
pub const DEFAULT_THRESHOLD: &str = "11";

// Mail
pub const SMTP_PORT: u16 = 25;
pub const ALERT_SUBJECT: &str = "Plotter ink low: reorder cartridges";
pub const STATUS_SUBJECT: &str = "Plotter ink status report";
pub const PLAIN_PLACEHOLDER: &str = "This message is HTML only. Open it in an HTML-capable mail client.";
