//! CLI error types with exit code handling
//!
//! External commands report failures through their own exit codes, and
//! those codes pass through to the deckhand process untouched. This
//! module maps everything else to the generic failure code.

use deckhand_tools::ToolError;
use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// An external tool is missing, or one of its commands failed
    #[error(transparent)]
    #[diagnostic(code(deckhand::tool))]
    Tool(#[from] ToolError),

    /// The invocation cannot proceed as given
    #[error("{message}")]
    #[diagnostic(code(deckhand::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Tool(err) => err.exit_code(),
            CliError::Input { .. } => exit_codes::ERROR,
        }
    }

    /// Create an input error with help text
    pub fn input_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
