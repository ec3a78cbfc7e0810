use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to parse config RON: {0}")]
    ConfigParseError(String),

    #[error("a seed is required (pass --seed or set `seed` in the config file)")]
    MissingSeed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error(transparent)]
    Generate(#[from] tessera_core::TesseraError),

    #[error(transparent)]
    Persist(#[from] tessera_persist::PersistError),
}
