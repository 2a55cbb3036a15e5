//! Executer backed by real child processes

use crate::error::{ReleaseError, ReleaseResult};
use crate::exec::executer::{ExecOutput, Executer};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::debug;

/// Executer that spawns programs with `tokio::process`
#[derive(Debug, Clone, Default)]
pub struct ProcessExecuter {
    temp_dir: Option<PathBuf>,
}

impl ProcessExecuter {
    /// Create an executer that uses the system temp directory
    pub fn new() -> Self {
        Self { temp_dir: None }
    }

    /// Create temp files under `dir` instead of the system temp directory
    pub fn with_temp_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_dir = dir;
        self
    }
}

#[async_trait]
impl Executer for ProcessExecuter {
    fn temp_file(&self, prefix: &str) -> ReleaseResult<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix);

        let file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };

        file.map_err(|e| ReleaseError::io(format!("creating temp file {}*", prefix), e))
    }

    async fn execute(&self, program: &str, args: &[String]) -> ReleaseResult<ExecOutput> {
        debug!("Executing: {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ReleaseError::command_failed(format!("{} {}", program, args.join(" ")), e))?;

        Ok(ExecOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
