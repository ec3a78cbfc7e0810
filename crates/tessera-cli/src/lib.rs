pub mod args;
pub mod config;
pub mod error;
pub mod report;
pub mod run;

pub use error::CliError;
