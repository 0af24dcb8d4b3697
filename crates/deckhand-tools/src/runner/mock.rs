//! Mock command runner for testing
//!
//! This runner never spawns anything. Tests script responses for command
//! prefixes and assert afterwards on the recorded invocations, which is
//! how the existence-guard behavior (build only when absent, create only
//! when missing) is pinned without docker or kind installed.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use super::CommandRunner;
use crate::command::{CapturedOutput, CommandSpec};
use crate::error::{Result, ToolError};

/// One scripted response
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// The command ran and exited with this code and stdout
    Complete { code: i32, stdout: String },
    /// The program could not be spawned at all
    Missing,
}

impl MockOutcome {
    /// A zero exit with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        MockOutcome::Complete {
            code: 0,
            stdout: stdout.into(),
        }
    }

    /// A non-zero exit with no output.
    pub fn code(code: i32) -> Self {
        MockOutcome::Complete {
            code,
            stdout: String::new(),
        }
    }
}

#[derive(Debug)]
struct Rule {
    prefix: Vec<String>,
    /// Consumed front-first; the final outcome is sticky so a rule keeps
    /// answering after its sequence runs out.
    outcomes: VecDeque<MockOutcome>,
}

/// In-memory scripted runner for unit tests
///
/// Unmatched commands succeed with empty output, so tests only script
/// the invocations they care about. Clones share state, which lets every
/// tool client in a `Toolbox` record into the same log.
#[derive(Clone, Default)]
pub struct MockRunner {
    invocations: Arc<RwLock<Vec<CommandSpec>>>,
    rules: Arc<RwLock<Vec<Rule>>>,
}

impl MockRunner {
    /// Create a runner where everything succeeds silently.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a sequence of outcomes for commands matching `prefix`.
    ///
    /// The last outcome repeats once the sequence is exhausted.
    pub fn script(&self, prefix: &[&str], outcomes: Vec<MockOutcome>) {
        assert!(!outcomes.is_empty(), "scripted rule needs at least one outcome");
        self.rules.write().unwrap().push(Rule {
            prefix: prefix.iter().map(|s| s.to_string()).collect(),
            outcomes: outcomes.into(),
        });
    }

    /// Script a zero exit with the given stdout.
    pub fn succeed_with(&self, prefix: &[&str], stdout: &str) {
        self.script(prefix, vec![MockOutcome::ok(stdout)]);
    }

    /// Script a non-zero exit.
    pub fn fail(&self, prefix: &[&str], code: i32) {
        self.script(prefix, vec![MockOutcome::code(code)]);
    }

    /// Script a program that cannot be spawned at all.
    pub fn missing(&self, program: &str) {
        self.script(&[program], vec![MockOutcome::Missing]);
    }

    /// Everything recorded so far, in invocation order.
    pub fn invocations(&self) -> Vec<CommandSpec> {
        self.invocations.read().unwrap().clone()
    }

    /// How many recorded invocations match `prefix`.
    pub fn count(&self, prefix: &[&str]) -> usize {
        self.invocations
            .read()
            .unwrap()
            .iter()
            .filter(|spec| spec.matches(prefix))
            .count()
    }

    /// Index of the first recorded invocation matching `prefix`.
    pub fn position(&self, prefix: &[&str]) -> Option<usize> {
        self.invocations
            .read()
            .unwrap()
            .iter()
            .position(|spec| spec.matches(prefix))
    }

    fn next_outcome(&self, spec: &CommandSpec) -> MockOutcome {
        let mut rules = self.rules.write().unwrap();
        for rule in rules.iter_mut() {
            let prefix: Vec<&str> = rule.prefix.iter().map(String::as_str).collect();
            if spec.matches(&prefix) {
                return if rule.outcomes.len() > 1 {
                    rule.outcomes.pop_front().unwrap()
                } else {
                    rule.outcomes.front().cloned().unwrap()
                };
            }
        }
        MockOutcome::ok("")
    }

    fn record(&self, spec: &CommandSpec) {
        self.invocations.write().unwrap().push(spec.clone());
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn capture(&self, spec: &CommandSpec) -> Result<CapturedOutput> {
        self.record(spec);
        match self.next_outcome(spec) {
            MockOutcome::Complete { code, stdout } => Ok(CapturedOutput {
                code,
                stdout,
                stderr: String::new(),
            }),
            MockOutcome::Missing => Err(ToolError::missing(spec.program())),
        }
    }

    async fn stream(&self, spec: &CommandSpec) -> Result<()> {
        self.record(spec);
        match self.next_outcome(spec) {
            MockOutcome::Complete { code: 0, .. } => Ok(()),
            MockOutcome::Complete { code, .. } => {
                Err(ToolError::command_failed(spec.to_string(), code, ""))
            }
            MockOutcome::Missing => Err(ToolError::missing(spec.program())),
        }
    }
}
