//! Custom error types for group refreshes.

use thiserror::Error;

use crate::error_handler::classifier::RunHaltingKind;

/// Main error type for refresh operations.
#[derive(Error, Debug)]
pub enum RefreshError {
    // Run-halting conditions
    #[error("Out of disk: {0}")]
    OutOfDisk(String),

    #[error("Out of memory")]
    OutOfMemory,

    #[error("All versions ignored: {0}")]
    AllVersionsIgnored(String),

    #[error("Unexpected external code: {0}")]
    UnexpectedExternalCode(String),

    #[error("Backend authentication failed: {0}")]
    Unauthorized(String),

    // Recoverable update failures
    #[error("Dependency file not resolvable: {0}")]
    DependencyFileNotResolvable(String),

    #[error("Dependency file not found: {0}")]
    DependencyFileNotFound(String),

    #[error("Git dependencies not reachable: {}", .0.join(", "))]
    GitDependenciesNotReachable(Vec<String>),

    #[error("Service operation failed: {0}")]
    Service(String),

    #[error("Failed to compile dependency changes: {0}")]
    Compile(String),

    // Internal defects
    #[error("Attempted to update a missing group.")]
    MissingGroup,

    // Job and configuration errors
    #[error("Invalid job: {0}")]
    InvalidJob(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Regular expression error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using RefreshError
pub type Result<T> = std::result::Result<T, RefreshError>;

impl RefreshError {
    /// Create a service error with context
    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    /// Create a compile error with context
    pub fn compile(msg: impl Into<String>) -> Self {
        Self::Compile(msg.into())
    }

    /// Create an invalid job error
    pub fn invalid_job(msg: impl Into<String>) -> Self {
        Self::InvalidJob(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// The run-halting category this error belongs to, if any.
    pub fn run_halting_kind(&self) -> Option<RunHaltingKind> {
        match self {
            Self::OutOfDisk(_) => Some(RunHaltingKind::OutOfDisk),
            Self::OutOfMemory => Some(RunHaltingKind::OutOfMemory),
            Self::AllVersionsIgnored(_) => {
                Some(RunHaltingKind::AllVersionsIgnored)
            }
            Self::UnexpectedExternalCode(_) => {
                Some(RunHaltingKind::UnexpectedExternalCode)
            }
            Self::Unauthorized(_) => Some(RunHaltingKind::Unauthorized),
            Self::Io(err) if err.kind() == std::io::ErrorKind::StorageFull => {
                Some(RunHaltingKind::OutOfDisk)
            }
            _ => None,
        }
    }

    /// Snake case identifier recorded with the backend when reporting a
    /// job error.
    pub fn error_type(&self) -> String {
        if let Some(kind) = self.run_halting_kind() {
            return kind.to_string();
        }

        let error_type = match self {
            Self::DependencyFileNotResolvable(_) => {
                "dependency_file_not_resolvable"
            }
            Self::DependencyFileNotFound(_) => "dependency_file_not_found",
            Self::GitDependenciesNotReachable(_) => {
                "git_dependencies_not_reachable"
            }
            Self::MissingGroup => "missing_group",
            _ => "unknown_error",
        };

        error_type.to_string()
    }
}
