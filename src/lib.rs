pub mod args;
pub mod client;
pub mod driver;
pub mod error;
pub mod orphans;
pub mod scanner;
