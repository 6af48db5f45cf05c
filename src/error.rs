use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("not an allowed CSS color: {0:?}")]
    InvalidColor(String),

    #[error("not a numeric literal: {0:?}")]
    InvalidNumber(String),

    #[error("URL scheme not in the allow list: {0:?}")]
    SchemeNotAllowed(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
