//! Blocking call-and-capture wrapper around child processes.
//!
//! [`run_cmd`] is the library form and returns errors to the caller.
//! [`run_cmd_or_exit`] is the script form: it prints the failure to stderr
//! and ends the process with status 1.

use crate::domain::model::{CommandOutput, Invocation};
use crate::domain::ports::Executor;
use crate::utils::error::{Result, TemplateError};
use std::process::Command;

/// Executes invocations as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    fn build_command(invocation: &Invocation) -> Command {
        match invocation {
            Invocation::Shell(command) => {
                #[cfg(windows)]
                let cmd = {
                    let mut cmd = Command::new("cmd");
                    cmd.args(["/C", command]);
                    cmd
                };

                #[cfg(not(windows))]
                let cmd = {
                    let mut cmd = Command::new("sh");
                    cmd.args(["-c", command]);
                    cmd
                };

                cmd
            }
            Invocation::Argv { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
        }
    }
}

impl Executor for SystemExecutor {
    fn execute(&self, invocation: &Invocation) -> Result<CommandOutput> {
        tracing::debug!("Running cmd: {}", invocation);

        let out = Self::build_command(invocation)
            .output()
            .map_err(|source| TemplateError::CommandIo {
                command: invocation.to_string(),
                source,
            })?;

        let output = CommandOutput {
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            exit_code: out.status.code(),
        };

        tracing::trace!(
            exit_code = ?output.exit_code,
            "cmd stdout:\n{}\ncmd stderr:\n{}",
            output.stdout,
            output.stderr
        );

        Ok(output)
    }
}

/// Runs `invocation` through `executor` and returns its stdout with
/// surrounding whitespace removed. A non-zero exit becomes
/// [`TemplateError::CommandFailed`] carrying the captured stderr.
pub fn run_cmd_with<E: Executor + ?Sized>(executor: &E, invocation: &Invocation) -> Result<String> {
    let output = executor.execute(invocation)?;

    if !output.success() {
        return Err(TemplateError::CommandFailed {
            command: invocation.to_string(),
            stderr: output.stderr,
            code: output.exit_code,
        });
    }

    Ok(output.stdout.trim().to_string())
}

pub fn run_cmd(invocation: &Invocation) -> Result<String> {
    run_cmd_with(&SystemExecutor, invocation)
}

/// Like [`run_cmd`], but any failure is fatal to the process.
pub fn run_cmd_or_exit(invocation: &Invocation) -> String {
    match run_cmd(invocation) {
        Ok(stdout) => stdout,
        Err(e) => e.exit(),
    }
}
