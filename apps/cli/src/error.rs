use thiserror::Error;
use unistyle_types::StyleError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid command arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Failed to read input: {message}")]
    Input { message: String },

    #[error("Profile '{profile}' not found")]
    ProfileNotFound { profile: String },

    #[error("Style error: {0}")]
    Core(#[from] StyleError),
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_args<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    pub fn profile_not_found<S: Into<String>>(profile: S) -> Self {
        Self::ProfileNotFound {
            profile: profile.into(),
        }
    }

    /// Get user-friendly error message for display
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("⚙️ Configuration Error: {}", message)
            }
            Self::InvalidArgs { message } => {
                format!("❌ Invalid Arguments: {}", message)
            }
            Self::Input { message } => {
                format!("📥 Input Error: {}", message)
            }
            Self::ProfileNotFound { profile } => {
                format!("📋 Profile '{}' not found. Use 'unistyle config list' to see available profiles.", profile)
            }
            Self::Core(e) => {
                format!("🔤 Style Error: {}", e)
            }
        }
    }

    /// Get error code for programmatic handling
    pub fn error_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 10,
            Self::InvalidArgs { .. } => 11,
            Self::Input { .. } => 12,
            Self::ProfileNotFound { .. } => 13,
            Self::Core(_) => 40,
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Config { .. } => true,
            Self::InvalidArgs { .. } => true,
            Self::Input { .. } => true,
            Self::ProfileNotFound { .. } => true,
            Self::Core(StyleError::Io(_)) => false,
            Self::Core(_) => true,
        }
    }

    /// Get suggestions for resolving the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config { .. } => vec![
                "Check your configuration file syntax".to_string(),
                "Use 'unistyle config show <profile>' to validate settings".to_string(),
            ],
            Self::InvalidArgs { .. } => vec![
                "Check command syntax with 'unistyle --help'".to_string(),
                "Verify all required arguments are provided".to_string(),
            ],
            Self::Input { .. } => vec![
                "Pass the text as an argument, with --input FILE, or on stdin".to_string(),
                "Ensure the input file exists and is valid UTF-8".to_string(),
            ],
            Self::ProfileNotFound { .. } => vec![
                "Use 'unistyle config list' to see available profiles".to_string(),
                "Create the profile with 'unistyle config create'".to_string(),
            ],
            Self::Core(StyleError::Io(_)) => vec![
                "Check file permissions".to_string(),
                "Verify the catalog paths in your configuration".to_string(),
            ],
            Self::Core(StyleError::Json(_)) => vec![
                "Validate JSON file syntax".to_string(),
                "Recreate the file if necessary".to_string(),
            ],
            Self::Core(StyleError::UnknownStyle { .. }) => vec![
                "Use 'unistyle styles' to list style keys".to_string(),
                "Check the catalogs listed in your configuration".to_string(),
            ],
            Self::Core(_) => vec![
                "Validate the catalog files listed in your configuration".to_string(),
                "Try with '--verbose' for detailed logging".to_string(),
            ],
        }
    }
}

// Helper function to display error with suggestions
pub fn display_error_with_help(error: &CliError) {
    eprintln!("{}", error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        eprintln!("\n💡 Suggestions:");
        for (i, suggestion) in suggestions.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, suggestion);
        }
    }

    if !error.is_recoverable() {
        eprintln!("\n⚠️  This error requires manual intervention.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = CliError::config("Test configuration error");
        assert!(matches!(error, CliError::Config { .. }));
    }

    #[test]
    fn test_user_message() {
        let error = CliError::input("stdin closed");
        let message = error.user_message();
        assert!(message.contains("📥"));
        assert!(message.contains("stdin closed"));
    }

    #[test]
    fn test_error_code() {
        assert_eq!(CliError::config("test").error_code(), 10);
        assert_eq!(CliError::invalid_args("test").error_code(), 11);
        assert_eq!(CliError::from(StyleError::unknown_style("x")).error_code(), 40);
    }

    #[test]
    fn test_is_recoverable() {
        assert!(CliError::config("test").is_recoverable());
        assert!(CliError::profile_not_found("work").is_recoverable());
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!CliError::from(StyleError::from(io_error)).is_recoverable());
    }

    #[test]
    fn test_unknown_style_suggests_listing() {
        let error = CliError::from(StyleError::unknown_style("wavy"));
        assert!(error.suggestions().iter().any(|s| s.contains("unistyle styles")));
    }
}
