use std::path::PathBuf;
use clap::Args;
use anyhow::Result;
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::error::CliError;

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to convert (reads --input or stdin when omitted)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    pub async fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        if let Some(path) = &self.input {
            debug!("Reading input from: {}", path.display());
            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| CliError::input(format!("{}: {}", path.display(), e)))?;
            return Ok(text);
        }

        debug!("Reading input from stdin");
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .map_err(|e| CliError::input(format!("stdin: {}", e)))?;
        Ok(strip_trailing_newline(text))
    }
}

// `echo` と heredoc が付ける末尾の改行を 1 つだけ落とす
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_inline_text() {
        let args = InputArgs {
            text: Some("Hello".to_string()),
            input: None,
        };
        assert_eq!(args.read().await.unwrap(), "Hello");
    }

    #[tokio::test]
    async fn test_read_file_keeps_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        std::fs::write(&path, "line one\nline two\n").unwrap();

        let args = InputArgs {
            text: None,
            input: Some(path),
        };
        assert_eq!(args.read().await.unwrap(), "line one\nline two\n");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_input_error() {
        let args = InputArgs {
            text: None,
            input: Some(PathBuf::from("/nonexistent/input.txt")),
        };
        let err = args.read().await.unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Input { .. })));
    }

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("abc\n".to_string()), "abc");
        assert_eq!(strip_trailing_newline("abc\r\n".to_string()), "abc");
        assert_eq!(strip_trailing_newline("abc\n\n".to_string()), "abc\n");
        assert_eq!(strip_trailing_newline(String::new()), "");
    }
}
