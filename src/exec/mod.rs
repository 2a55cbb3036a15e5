//! External command execution
//!
//! Every `oc` invocation goes through the [`Executer`] trait so the process
//! layer can be substituted in tests. [`run_with_pull_secret`] layers the
//! registry credential handling on top of it.

mod command;
mod executer;
mod process;
mod registry;

#[cfg(test)]
pub(crate) mod mock;

pub use command::CommandLine;
pub use executer::{ExecOutput, Executer};
pub use process::ProcessExecuter;
pub use registry::{run_with_pull_secret, REGISTRY_CONFIG_PREFIX};
