use thiserror::Error;

/// Unified error type for verset operations
#[derive(Error, Debug)]
pub enum VersetError {
    #[error("{0}")]
    OldConfiguration(String),

    #[error("Invalid value for '{field}': '{value}'. Allowed values: {allowed}")]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: String,
    },

    #[error("Invalid branch pattern '{pattern}': {source}")]
    InvalidBranchPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to parse configuration document: {0}")]
    Document(#[from] toml::de::Error),

    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in verset
pub type Result<T> = std::result::Result<T, VersetError>;

impl VersetError {
    /// Build the aggregated legacy-key failure from collected violation lines
    pub fn old_configuration(header: &str, violations: &[String]) -> Self {
        let mut message = String::from(header);
        for violation in violations {
            message.push('\n');
            message.push_str(violation);
        }
        VersetError::OldConfiguration(message)
    }

    /// Create an invalid-enum error naming the offending field and the allowed values
    pub fn invalid_enum(field: &str, value: &str, allowed: &[&str]) -> Self {
        VersetError::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            allowed: allowed.join(", "),
        }
    }
}
