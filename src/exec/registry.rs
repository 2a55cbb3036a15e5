//! Running `oc` with registry credentials
//!
//! The pull secret only ever touches disk as a temp file scoped to a single
//! invocation. The file is handed to the tool through `--registry-config`
//! and removed when the invocation returns, whatever the outcome.

use crate::error::{ReleaseError, ReleaseResult};
use crate::exec::command::CommandLine;
use crate::exec::executer::Executer;
use std::io::Write;
use tracing::{debug, error};

/// Name prefix of the temp file holding the pull secret
pub const REGISTRY_CONFIG_PREFIX: &str = "registry-config";

/// Run `command` with `pull_secret` passed as `--registry-config=<path>`
///
/// Returns stdout with surrounding whitespace trimmed. A non-zero exit
/// yields [`ReleaseError::CommandExecution`] carrying the full command
/// line, exit code, stdout and stderr.
pub async fn run_with_pull_secret(
    executer: &dyn Executer,
    pull_secret: &str,
    command: &CommandLine,
) -> ReleaseResult<String> {
    let mut file = executer.temp_file(REGISTRY_CONFIG_PREFIX)?;
    file.write_all(pull_secret.as_bytes())
        .map_err(|e| ReleaseError::io("writing pull secret to temp file", e))?;
    file.flush()
        .map_err(|e| ReleaseError::io("flushing pull secret temp file", e))?;

    // Closes the handle; the file is deleted when `secret_path` drops.
    let secret_path = file.into_temp_path();

    let command = command
        .clone()
        .arg(format!("--registry-config={}", secret_path.display()));
    debug!(command = %command, "Running release tool");

    let output = executer
        .execute(command.program(), command.arguments())
        .await?;

    if output.success() {
        return Ok(output.stdout.trim().to_string());
    }

    let err = ReleaseError::CommandExecution {
        command: command.to_string(),
        code: output.exit_code,
        stdout: output.stdout,
        stderr: output.stderr,
    };
    error!("{}", err);
    Err(err)
}
