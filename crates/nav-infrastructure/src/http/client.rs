//! HTTP client construction

use reqwest::Client;
use std::time::Duration;

pub fn build_client(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .connect_timeout(Duration::from_secs(3))
        .build()
}
