use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and every lookup was answered
/// - `Failure` (1): Command completed but a country or language was not found
/// - `Error` (2): Command failed, usually because reference data could not be loaded
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and every lookup was answered.
    Success,
    /// A lookup missed.
    Failure,
    /// Command failed (unreadable data file, invalid config, I/O error).
    Error,
}

impl ExitStatus {
    /// `Success` when a lookup was answered, `Failure` otherwise.
    pub fn from_found(found: bool) -> Self {
        if found {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
