use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to run cmd '{command}'. See error below:\n\n{stderr}")]
    CommandFailed {
        command: String,
        stderr: String,
        code: Option<i32>,
    },

    #[error("Caught IO error while running '{command}'. See error below:\n\n{source}")]
    CommandIo {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open log file '{path}': {source}")]
    LogFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot compute {base} ** {exponent}: {reason}")]
    OverflowError {
        base: String,
        exponent: i64,
        reason: String,
    },

    #[error("0 cannot be raised to a negative power ({exponent})")]
    ZeroDivisionError { exponent: i64 },

    #[error("Invalid pattern '{pattern}': {source}")]
    PatternError {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl TemplateError {
    /// Process exit status for this error. A bad package pattern is an
    /// argument error like the ones clap reports, so it shares status 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            TemplateError::PatternError { .. } => 2,
            _ => 1,
        }
    }

    /// Writes the message to stderr and terminates with [`Self::exit_code`].
    pub fn exit(&self) -> ! {
        tracing::debug!(exit_code = self.exit_code(), "Exiting after error: {:?}", self);
        eprintln!("{}", self);
        std::process::exit(self.exit_code());
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
