use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropClassError {
    #[error(
        "{component} error: You passed a \"ref\" to a component which has a \"decorate\" flag as well. \
         This is not allowed. Either pass your \"ref\" directly to the child component you want to \
         reference or consider not decorating at all."
    )]
    RefWithDecorate { component: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PropClassError>;
