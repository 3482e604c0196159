use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Gateway request failed: {0}")]
    GatewayError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("RFC call failed: {message}")]
    RfcError { message: String },

    #[error(
        "Dataset has {actual} columns but the RFC expects {expected}; required columns: {required}"
    )]
    ColumnCountMismatch {
        expected: usize,
        actual: usize,
        required: String,
    },

    #[error("Column {column} is not a parameter of the RFC")]
    UnknownColumn { column: String },

    #[error("Different data type in column {column}: needed is {expected} and now is {actual}")]
    ColumnTypeMismatch {
        column: String,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
