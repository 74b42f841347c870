use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

/// Failure of a whole run, tagged with the step that failed
#[derive(Debug, Error)]
pub enum OrphanError {
    #[error("Error fetching recording paths")]
    FetchRecordings(#[source] RecorderError),

    #[error("Error fetching storage paths")]
    FetchStoragePaths(#[source] RecorderError),

    #[error("Error scanning storage paths")]
    Scan(#[from] ScanError),

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}
