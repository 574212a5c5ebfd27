//! Registry of error categories that abort the whole job.
use strum::Display;

use crate::error::RefreshError;

/// Error categories severe enough that continuing the job is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RunHaltingKind {
    OutOfDisk,
    OutOfMemory,
    AllVersionsIgnored,
    UnexpectedExternalCode,
    Unauthorized,
}

/// Every kind that halts a run. Anything not listed here is recoverable.
pub const RUN_HALTING_ERRORS: &[RunHaltingKind] = &[
    RunHaltingKind::OutOfDisk,
    RunHaltingKind::OutOfMemory,
    RunHaltingKind::AllVersionsIgnored,
    RunHaltingKind::UnexpectedExternalCode,
    RunHaltingKind::Unauthorized,
];

/// Outcome of classifying an error raised while applying a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    RunHalting(RunHaltingKind),
    Recoverable,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, err: &RefreshError) -> ErrorClass {
        match err.run_halting_kind() {
            Some(kind) if RUN_HALTING_ERRORS.contains(&kind) => {
                ErrorClass::RunHalting(kind)
            }
            _ => ErrorClass::Recoverable,
        }
    }

    pub fn is_run_halting(&self, err: &RefreshError) -> bool {
        matches!(self.classify(err), ErrorClass::RunHalting(_))
    }
}
