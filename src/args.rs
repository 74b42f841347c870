use clap::Parser;
use std::time::Duration;

pub const DEFAULT_IP: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8089;

/// Applied to every request sent to the recorder
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Parser)]
#[command(version, about = "Find orphaned recordings in Channels DVR.")]
pub struct Args {
    /// IP address of Channels DVR
    #[arg(long, default_value = DEFAULT_IP)]
    pub ip: String,

    /// Port number of Channels DVR
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Args {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.ip, self.port)
    }
}

/// Everything the driver needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config::new(args.base_url())
    }
}
