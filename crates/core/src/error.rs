use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("aggregation failed: {0}")]
    Aggregation(String),
    #[error("override rejected: {0}")]
    Override(String),
    #[error("unknown risk component: {0}")]
    UnknownComponent(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
