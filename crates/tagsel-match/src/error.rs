use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("illegal tag number {0}")]
    InvalidTag(i64),

    #[error("unknown type of tag extraction argument: '{0}'")]
    UnknownArgumentType(String),

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("unknown setup mode '{0}' (expected 'any', 'none' or 'only')")]
    UnknownSetupMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
