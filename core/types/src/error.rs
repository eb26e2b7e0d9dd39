use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog error in {path}: {message}")]
    Catalog { path: PathBuf, message: String },

    #[error("Unknown style: {key}")]
    UnknownStyle { key: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl StyleError {
    pub fn unknown_style<S: Into<String>>(key: S) -> Self {
        Self::UnknownStyle { key: key.into() }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn catalog<S: Into<String>>(path: PathBuf, message: S) -> Self {
        Self::Catalog {
            path,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_message() {
        let err = StyleError::unknown_style("wavy");
        assert_eq!(err.to_string(), "Unknown style: wavy");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StyleError::from(json_err);
        assert!(matches!(err, StyleError::Json(_)));
    }
}
