//! Read-only client for the recorder's local HTTP API.
//!
//! Every call is a single blocking GET. Any transport failure, non-2xx status
//! or body that does not match the expected shape is returned as a
//! [`RecorderError`]; nothing is retried.

use log::debug;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::args::REQUEST_TIMEOUT;
use crate::error::RecorderError;

pub const STORAGE_ENDPOINT: &str = "/dvr";
pub const RECORDINGS_ENDPOINT: &str = "/api/v1/all";

/// Storage configuration as reported by `GET /dvr`
#[derive(Debug, Clone, Deserialize)]
struct DvrInfo {
    path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    extra_paths: Vec<String>,
}

/// One item of `GET /api/v1/all`; only the location on disk is used
#[derive(Debug, Clone, Deserialize)]
struct RecordingEntry {
    path: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

pub struct RecorderClient {
    client: Client,
    base_url: String,
}

impl RecorderClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RecorderError> {
        let base_url = base_url.into();
        // The recorder lives on the local network, never behind a proxy
        let client = Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(|source| RecorderError::Request {
                url: base_url.clone(),
                source,
            })?;

        Ok(RecorderClient { client, base_url })
    }

    /// Primary storage path followed by the extra paths, in server order
    pub fn fetch_storage_paths(&self) -> Result<Vec<String>, RecorderError> {
        let info: DvrInfo = self.get_json(STORAGE_ENDPOINT)?;

        let mut paths = Vec::with_capacity(1 + info.extra_paths.len());
        paths.push(info.path);
        paths.extend(info.extra_paths);
        Ok(paths)
    }

    /// Paths of every recording in the recorder's database, in server order
    pub fn fetch_recording_paths(&self) -> Result<Vec<String>, RecorderError> {
        let recordings: Vec<RecordingEntry> = self.get_json(RECORDINGS_ENDPOINT)?;
        Ok(recordings.into_iter().map(|r| r.path).collect())
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, RecorderError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| RecorderError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecorderError::Status { url, status });
        }

        let body = response.text().map_err(|source| RecorderError::Body {
            url: url.clone(),
            source,
        })?;
        debug!("{} returned {} bytes", url, body.len());

        serde_json::from_str(&body).map_err(|source| RecorderError::Decode { url, source })
    }
}

pub fn fetch_storage_paths(base_url: &str) -> Result<Vec<String>, RecorderError> {
    RecorderClient::new(base_url, REQUEST_TIMEOUT)?.fetch_storage_paths()
}

pub fn fetch_recording_paths(base_url: &str) -> Result<Vec<String>, RecorderError> {
    RecorderClient::new(base_url, REQUEST_TIMEOUT)?.fetch_recording_paths()
}
