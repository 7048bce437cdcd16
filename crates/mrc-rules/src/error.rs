use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid label pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, RuleError>;
