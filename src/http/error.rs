use thiserror::Error;
use tokio::time::error::Elapsed;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("Request to {1} failed with status code: {0}")]
    Status(u16, String),
    #[error("Timeout error")]
    Timeout(#[from] Elapsed),
}
