// src/core/net.rs

// Blocking HTTPS GET helpers. One short-lived client per request;
// nothing is held across pipeline iterations.

use std::{error::Error, time::Duration};

use reqwest::{StatusCode, blocking::Client};
use serde::de::DeserializeOwned;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

fn client() -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// GET a plain-text resource. Any non-success status is an error.
pub fn get_text(url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client()?.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}

/// GET a JSON resource. 404 maps to `None`; everything else non-success
/// is an error. The caller decides whether that error is fatal.
pub fn get_json<T: DeserializeOwned>(url: &str) -> Result<Option<T>, Box<dyn Error>> {
    let resp = client()?.get(url).send()?;
    if resp.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    Ok(Some(resp.error_for_status()?.json()?))
}
