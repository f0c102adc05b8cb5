use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RankError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type RankResult<T> = std::result::Result<T, RankError>;
