use pt_core::TrailError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] TrailError),

    #[error("simulation drivers are already running")]
    AlreadyRunning,
}

pub type SimResult<T> = Result<T, SimError>;
