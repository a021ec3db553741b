use crate::domain::model::{CommandOutput, Invocation};
use crate::utils::error::Result;

/// Runs one invocation to completion and hands back what it printed.
///
/// An `Err` means the process could not be run at all. A process that ran
/// and exited non-zero is still `Ok`; callers decide what that means.
pub trait Executor {
    fn execute(&self, invocation: &Invocation) -> Result<CommandOutput>;
}
