use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown classification key: {0}")]
    UnknownKey(String),
    #[error("unknown {vocabulary} tag: {value}")]
    UnknownTag {
        vocabulary: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
