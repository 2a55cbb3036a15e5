//! Process execution abstraction
//!
//! Provides a trait for the two operations the release tooling needs from
//! the host: scoped temporary files and running an external program.

use crate::error::ReleaseResult;
use async_trait::async_trait;
use tempfile::NamedTempFile;

/// Captured result of a finished external program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// Standard output, lossily decoded as UTF-8
    pub stdout: String,

    /// Standard error, lossily decoded as UTF-8
    pub stderr: String,

    /// Exit code (-1 when the process was terminated by a signal)
    pub exit_code: i32,
}

impl ExecOutput {
    /// Successful output with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    /// Failed output with the given exit code and stderr
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    /// Whether the program exited with code zero
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Abstract process executer
///
/// Implementations must be shareable across tasks; the release resolver
/// holds one behind an `Arc` and calls it concurrently.
#[async_trait]
pub trait Executer: Send + Sync {
    /// Create a temporary file whose name starts with `prefix`
    ///
    /// The file is removed when the returned handle (or the `TempPath` it is
    /// converted into) is dropped.
    fn temp_file(&self, prefix: &str) -> ReleaseResult<NamedTempFile>;

    /// Run `program` with `args` and wait for it to finish
    ///
    /// A non-zero exit is not an error at this layer; only a failure to
    /// start the program is.
    async fn execute(&self, program: &str, args: &[String]) -> ReleaseResult<ExecOutput>;
}
