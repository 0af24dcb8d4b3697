//! Error types for deckhand-tools

use thiserror::Error;

/// Result type for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;

/// Errors that can occur while delegating to an external tool
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ToolError {
    /// A required external tool is missing or did not respond
    #[error(
        "{tool} is required but not available; check that it is installed and on your PATH"
    )]
    MissingTool { tool: String },

    /// A delegated command ran and reported failure
    #[error("`{}` exited with status {}{}", .command, .code, fmt_stderr(.stderr))]
    CommandFailed {
        command: String,
        code: i32,
        /// Captured stderr for quiet queries; empty for streamed commands,
        /// whose stderr already went to the terminal.
        stderr: String,
    },

    /// No build context with the requested name
    #[error("no build context named '{name}' under {dir} (expected {dir}/{name}/Dockerfile)")]
    UnknownImage { name: String, dir: String },

    /// A tool produced output we could not make sense of
    #[error("unexpected {tool} output: {message}")]
    UnexpectedOutput { tool: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{trimmed}")
    }
}

impl ToolError {
    /// The process exit code this error maps to.
    ///
    /// External command failures pass their own exit code through; every
    /// other failure (missing tool, bad input, IO) is a plain 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }

    /// Create a failure for a completed command, attaching captured stderr.
    pub fn command_failed(command: impl Into<String>, code: i32, stderr: impl Into<String>) -> Self {
        ToolError::CommandFailed {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Create a missing-tool error.
    pub fn missing(tool: impl Into<String>) -> Self {
        ToolError::MissingTool { tool: tool.into() }
    }
}
