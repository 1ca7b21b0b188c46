use thiserror::Error;

#[derive(Error, Debug)]
pub enum KlError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{format} parse error: {message}")]
    Parse { format: &'static str, message: String },

    #[error("error when deserializing type {type_name}: {message}")]
    Deserialize { type_name: String, message: String },

    #[error("invalid enum value for {enum_name}: {value}")]
    InvalidEnumValue { enum_name: &'static str, value: String },

    #[error("invalid base64 input: {input}")]
    InvalidBase64 { input: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl KlError {
    /// Process exit code used by the `kl` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            KlError::InvalidEnumValue { .. }
            | KlError::InvalidBase64 { .. }
            | KlError::ConfigError { .. }
            | KlError::InvalidConfigValueError { .. }
            | KlError::Parse { format: "TOML", .. } => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, KlError>;
