use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogqlError {
    #[error("Couldn't find post with id {}", .id.map_or_else(|| "null".to_string(), |id| id.to_string()))]
    NotFound { id: Option<i32> },

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema generation error: {0}")]
    SchemaGeneration(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BlogqlError {
    pub fn not_found(id: i32) -> Self {
        BlogqlError::NotFound { id: Some(id) }
    }
}

impl From<toml::ser::Error> for BlogqlError {
    fn from(err: toml::ser::Error) -> Self {
        BlogqlError::Serialization(format!("TOML serialization error: {}", err))
    }
}

impl From<::config::ConfigError> for BlogqlError {
    fn from(err: ::config::ConfigError) -> Self {
        BlogqlError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BlogqlError>;
