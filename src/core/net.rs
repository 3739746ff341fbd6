// src/core/net.rs
// Blocking HTTP GET for the device status page. Default client, default timeouts.

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::Result;

/// Fetch `url` and return the body as UTF-8 text.
///
/// Non-2xx responses, transport failures and invalid UTF-8 are all errors.
/// There is no retry.
pub fn http_get(url: &str) -> Result<String> {
    get_with(&Client::new(), url)
}

fn get_with(client: &Client, url: &str) -> Result<String> {
    debug!(url, "GET status page");
    let resp = client.get(url).send()?.error_for_status()?;
    let bytes = resp.bytes()?;
    debug!(len = bytes.len(), "status page received");
    Ok(String::from_utf8(bytes.to_vec())?)
}
