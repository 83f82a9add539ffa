// src/core/net.rs
// Single blocking GET. No retries; a failure here means no records.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Fetch `url` and return the body decoded as text (charset from the response).
/// Any non-2xx status is an error.
pub fn http_get(url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    let t = std::time::Instant::now();
    let resp = client
        .get(url)
        .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.5")
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status, url: s!(url) });
    }

    let body = resp.text()?;
    logd!("GET {url}: {} bytes in {:?}", body.len(), t.elapsed());
    Ok(body)
}
