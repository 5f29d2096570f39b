use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    ParseError(#[from] toml::de::Error),
    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Configuration file {0} not found or corrupt")]
    MissingFile(String),
    #[error("Configuration file {0} created, edit it and start again")]
    CreatedFile(String),
    #[error("Invalid value for {name}: \"{value}\"")]
    InvalidValue { name: String, value: String },
}
