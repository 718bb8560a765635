#[derive(Debug, Clone, PartialEq)]
pub enum WizardError {
    /// Re-initialization with ids that conflict with the recorded pair. An
    /// integration bug, not a user error; surfaced to the status line.
    PreconditionViolation {
        existing: (i64, i64),
        requested: (i64, i64),
    },
    /// `goto` target outside the closed [1,8] step space.
    InvalidStepTarget(u8),
    /// Write-through persistence of the session file failed.
    Persistence(String),
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardError::PreconditionViolation {
                existing,
                requested,
            } => {
                write!(
                    f,
                    "Init ids already set to ({}, {}); refusing conflicting ({}, {})",
                    existing.0, existing.1, requested.0, requested.1
                )
            }
            WizardError::InvalidStepTarget(target) => {
                write!(f, "Invalid step target: {}", target)
            }
            WizardError::Persistence(msg) => {
                write!(f, "Session persistence failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for WizardError {}

pub type WizardResult<T> = Result<T, WizardError>;
