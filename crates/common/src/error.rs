//! Error types shared across standcard crates.

use std::path::PathBuf;

/// Usage line for the table registration command.
pub const REG_TABLE_USAGE: &str = "Format: /reg_table <tournament> <organization> <stage> <link>";

/// Top-level error type for standcard operations.
#[derive(Debug, thiserror::Error)]
pub enum StandcardError {
    /// The selector found no team for the organization. Informational.
    #[error("No records match organization filter {criterion:?}")]
    NoMatch { criterion: String },

    #[error("Failed to load template {path}: {message}")]
    TemplateLoad { path: PathBuf, message: String },

    #[error("Failed to load font {path}: {message}")]
    FontLoad { path: PathBuf, message: String },

    #[error("Record source error: {message}")]
    Source { message: String },

    #[error("Invalid spreadsheet link: {message}")]
    InvalidLink { message: String },

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using StandcardError.
pub type StandcardResult<T> = Result<T, StandcardError>;

impl StandcardError {
    pub fn no_match(criterion: impl Into<String>) -> Self {
        Self::NoMatch {
            criterion: criterion.into(),
        }
    }

    pub fn template_load(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::TemplateLoad {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn font_load(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::FontLoad {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source {
            message: msg.into(),
        }
    }

    pub fn invalid_link(msg: impl Into<String>) -> Self {
        Self::InvalidLink {
            message: msg.into(),
        }
    }

    pub fn invalid_command(msg: impl Into<String>) -> Self {
        Self::InvalidCommand {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether this is the informational "nothing matched" outcome rather
    /// than a fault.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }

    /// Short message safe to show to an end user.
    ///
    /// Never includes paths, URLs, or underlying error text; those belong in
    /// the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoMatch { .. } => "No teams from this organization were found.",
            Self::InvalidCommand { .. } => REG_TABLE_USAGE,
            _ => "Failed to process the table. Check the link and format.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_informational() {
        let err = StandcardError::no_match("meow");
        assert!(err.is_no_match());
        assert_eq!(
            err.user_message(),
            "No teams from this organization were found."
        );
    }

    #[test]
    fn test_user_message_hides_paths() {
        let err = StandcardError::template_load("/secret/dir/card_template.png", "not found");
        assert!(!err.user_message().contains("/secret"));
        assert!(err.to_string().contains("card_template.png"));
        assert!(!err.is_no_match());
    }

    #[test]
    fn test_invalid_command_shows_usage() {
        let err = StandcardError::invalid_command("expected 4 arguments");
        assert_eq!(err.user_message(), REG_TABLE_USAGE);
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StandcardError = io.into();
        assert!(matches!(err, StandcardError::Io(_)));
    }
}
