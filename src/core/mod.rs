pub mod color_log;
pub mod file_io;
pub mod pkg_query;
pub mod power;
pub mod runner;

pub use crate::domain::model::{CommandOutput, Invocation, Severity};
pub use crate::domain::ports::Executor;
pub use crate::utils::error::Result;
