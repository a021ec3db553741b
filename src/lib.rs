pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{ColorLogArgs, FileIoArgs, PkgQueryArgs, PowerArgs};

pub use config::LoggerConfig;
pub use core::color_log::Logger;
pub use core::runner::{run_cmd, run_cmd_or_exit, SystemExecutor};
pub use domain::model::{CommandOutput, Invocation, Severity};
pub use utils::error::{Result, TemplateError};
