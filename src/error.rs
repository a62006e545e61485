use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContribError>;

#[derive(Error, Debug)]
pub enum ContribError {
    /// git could not be started at all.
    #[error("Failed to launch git: {0}")]
    Launch(#[from] std::io::Error),
    /// git ran but reported a fatal condition; holds its output verbatim.
    #[error("{0}")]
    Repository(String),
}
