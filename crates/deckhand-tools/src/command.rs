//! Command descriptions
//!
//! A `CommandSpec` is a fully-rendered external invocation: program name
//! plus argument list, nothing else. Specs are built by the tool clients,
//! executed by a `CommandRunner`, and rendered with `Display` for command
//! echo and error messages.

use std::fmt;

/// A fully-rendered external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Start a spec for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The program to invoke.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The argument list, without the program.
    pub fn argv(&self) -> &[String] {
        &self.args
    }

    /// True when program plus leading arguments match `prefix`.
    ///
    /// `spec.matches(&["kind", "get", "clusters"])` is how the mock runner
    /// and tests recognize invocations without caring about trailing flags.
    pub fn matches(&self, prefix: &[&str]) -> bool {
        let Some((program, rest)) = prefix.split_first() else {
            return true;
        };
        if self.program != *program {
            return false;
        }
        rest.len() <= self.args.len() && self.args.iter().zip(rest).all(|(a, p)| a == p)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.chars().any(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Collected output of a completed command
///
/// `capture` produces one of these for any process that actually ran,
/// whatever its exit status; callers decide whether a non-zero status is
/// an answer (existence probes) or a failure.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// Exit code; signal-terminated processes are reported as 1
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// True when the command exited 0.
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Turn a non-zero exit into `ToolError::CommandFailed`, carrying the
    /// captured stderr so quiet queries still explain themselves.
    pub fn checked(self, spec: &CommandSpec) -> crate::Result<CapturedOutput> {
        if self.success() {
            Ok(self)
        } else {
            Err(crate::ToolError::command_failed(
                spec.to_string(),
                self.code,
                self.stderr,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let spec = CommandSpec::new("docker").args(["build", "-t", "demo/gateway:dev", "images/gateway"]);
        assert_eq!(spec.to_string(), "docker build -t demo/gateway:dev images/gateway");
    }

    #[test]
    fn display_quotes_whitespace() {
        let spec = CommandSpec::new("helm").args(["upgrade", "--set", "a=hello world"]);
        assert_eq!(spec.to_string(), "helm upgrade --set 'a=hello world'");
    }

    #[test]
    fn matches_on_program_and_prefix() {
        let spec = CommandSpec::new("kind").args(["get", "clusters"]);
        assert!(spec.matches(&["kind"]));
        assert!(spec.matches(&["kind", "get"]));
        assert!(spec.matches(&["kind", "get", "clusters"]));
        assert!(!spec.matches(&["kind", "get", "clusters", "--name"]));
        assert!(!spec.matches(&["kind", "create"]));
        assert!(!spec.matches(&["docker", "get"]));
    }

    #[test]
    fn empty_prefix_matches_everything() {
        let spec = CommandSpec::new("kubectl");
        assert!(spec.matches(&[]));
    }

    #[test]
    fn checked_passes_success_through() {
        let spec = CommandSpec::new("kind").args(["get", "clusters"]);
        let out = CapturedOutput {
            code: 0,
            stdout: "demo\n".into(),
            stderr: String::new(),
        };
        assert!(out.checked(&spec).is_ok());
    }

    #[test]
    fn checked_turns_failure_into_error() {
        let spec = CommandSpec::new("kind").args(["get", "clusters"]);
        let out = CapturedOutput {
            code: 2,
            stdout: String::new(),
            stderr: "boom".into(),
        };
        let err = out.checked(&spec).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("boom"));
    }
}
