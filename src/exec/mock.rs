//! Recording executer for tests

use crate::error::{ReleaseError, ReleaseResult};
use crate::exec::executer::{ExecOutput, Executer};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

type Responder = Box<dyn Fn(&[String]) -> ExecOutput + Send + Sync>;

/// Executer that answers from a responder and records every call
///
/// Each recorded call is the full argv (program first). When an invocation
/// carries `--registry-config=<path>`, the file's contents at call time are
/// captured as well.
pub(crate) struct MockExecuter {
    temp_dir: TempDir,
    responder: Responder,
    delay: Option<Duration>,
    calls: Mutex<Vec<Vec<String>>>,
    temp_paths: Mutex<Vec<PathBuf>>,
    secrets: Mutex<Vec<String>>,
}

impl MockExecuter {
    pub(crate) fn new<F>(responder: F) -> Self
    where
        F: Fn(&[String]) -> ExecOutput + Send + Sync + 'static,
    {
        Self {
            temp_dir: TempDir::new().expect("mock temp dir should be created"),
            responder: Box::new(responder),
            delay: None,
            calls: Mutex::new(Vec::new()),
            temp_paths: Mutex::new(Vec::new()),
            secrets: Mutex::new(Vec::new()),
        }
    }

    /// Answer every call with `output`
    pub(crate) fn always(output: ExecOutput) -> Self {
        Self::new(move |_| output.clone())
    }

    /// Answer calls in order; the last output repeats once the rest are used
    pub(crate) fn sequence(outputs: Vec<ExecOutput>) -> Self {
        let queue = Mutex::new(VecDeque::from(outputs));
        Self::new(move |_| {
            let mut queue = queue.lock().expect("queue mutex should not be poisoned");
            if queue.len() > 1 {
                queue.pop_front().unwrap_or_default()
            } else {
                queue.front().cloned().unwrap_or_default()
            }
        })
    }

    /// Sleep before answering, to widen race windows
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .expect("calls mutex should not be poisoned")
            .clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls
            .lock()
            .expect("calls mutex should not be poisoned")
            .len()
    }

    pub(crate) fn temp_paths(&self) -> Vec<PathBuf> {
        self.temp_paths
            .lock()
            .expect("temp_paths mutex should not be poisoned")
            .clone()
    }

    pub(crate) fn secrets_seen(&self) -> Vec<String> {
        self.secrets
            .lock()
            .expect("secrets mutex should not be poisoned")
            .clone()
    }
}

#[async_trait]
impl Executer for MockExecuter {
    fn temp_file(&self, prefix: &str) -> ReleaseResult<NamedTempFile> {
        let file = tempfile::Builder::new()
            .prefix(prefix)
            .tempfile_in(self.temp_dir.path())
            .map_err(|e| ReleaseError::io("creating mock temp file", e))?;
        self.temp_paths
            .lock()
            .expect("temp_paths mutex should not be poisoned")
            .push(file.path().to_path_buf());
        Ok(file)
    }

    async fn execute(&self, program: &str, args: &[String]) -> ReleaseResult<ExecOutput> {
        let argv: Vec<String> = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect();

        if let Some(path) = args
            .iter()
            .find_map(|a| a.strip_prefix("--registry-config="))
        {
            let secret = std::fs::read_to_string(path)
                .map_err(|e| ReleaseError::io("reading registry config in mock", e))?;
            self.secrets
                .lock()
                .expect("secrets mutex should not be poisoned")
                .push(secret);
        }

        self.calls
            .lock()
            .expect("calls mutex should not be poisoned")
            .push(argv.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        Ok((self.responder)(&argv))
    }
}
