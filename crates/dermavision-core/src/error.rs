use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing credential: {0}")]
    MissingCredential(String),
}
