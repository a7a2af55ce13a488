use std::time::Duration;

use reqwest::{
    blocking::{
        Client,
        Response,
    },
    header::USER_AGENT,
};

use crate::core::AnkigenError;

pub fn http_client() -> Result<Client, AnkigenError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| AnkigenError::Custom(format!("HTTP client build failed: {e}")))
}

// Single attempt on purpose. Callers decide whether a failure is worth
// surfacing to the user for a retry.
pub fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, AnkigenError> {
    let resp = client.get(url).header(USER_AGENT, "ankigen/0.1 (+reqwest)").send()?;
    ensure_success(&resp)?;
    Ok(resp.bytes()?.to_vec())
}

fn ensure_success(resp: &Response) -> Result<(), AnkigenError> {
    if !resp.status().is_success() {
        return Err(AnkigenError::Custom(format!(
            "HTTP error {} from {}",
            resp.status(),
            resp.url()
        )));
    }
    Ok(())
}
