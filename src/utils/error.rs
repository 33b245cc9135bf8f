use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("IO error while trying to {operation} '{}': {source}", path.display())]
    IoError {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in '{}' at line {line}: {message}", path.display())]
    ParseError {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("Template error: {message}")]
    TemplateError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Template,
    Config,
}

impl DocgenError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ParseError { .. } => ErrorCategory::Parse,
            Self::TemplateError { .. } => ErrorCategory::Template,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// Process exit status for this error. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Parse => 3,
            ErrorCategory::Template => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Parse => format!("Service catalogue is malformed: {}", self),
            ErrorCategory::Template => format!("Page template is broken: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => {
                "Check that the source file exists and the target directory is writable"
            }
            ErrorCategory::Parse => {
                "Make sure every row of the catalogue has the same number of columns as the header"
            }
            ErrorCategory::Template => "The embedded page template is corrupted; rebuild the tool",
            ErrorCategory::Config => "Review the command line flags and the TOML config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, DocgenError>;
