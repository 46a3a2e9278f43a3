//! Process exit status
//!
//! The one piece of data this crate produces: an integer in the conventional
//! exit-code range, created once per invocation and immutable afterwards.

use std::fmt;
use std::process::ExitCode;

/// Exit status resolved by the entrypoint adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatus(u8);

impl ExitStatus {
    /// Conventional success.
    pub const SUCCESS: ExitStatus = ExitStatus(0);

    /// Fixed fallback for any failure reaching the adapter boundary.
    pub const FAILURE: ExitStatus = ExitStatus(1);

    /// Map an entrypoint's integer result to an exit status.
    ///
    /// Values in 0..=255 pass through unmodified. Anything outside that range
    /// is not a representable exit code and collapses to [`ExitStatus::FAILURE`].
    pub fn from_code(code: i32) -> Self {
        match u8::try_from(code) {
            Ok(code) => ExitStatus(code),
            Err(_) => ExitStatus::FAILURE,
        }
    }

    /// The raw code handed to the operating environment.
    pub fn code(self) -> i32 {
        i32::from(self.0)
    }

    pub fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.0)
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_passthrough() {
        assert_eq!(ExitStatus::from_code(0), ExitStatus::SUCCESS);
        assert_eq!(ExitStatus::from_code(1), ExitStatus::FAILURE);
        assert_eq!(ExitStatus::from_code(7).code(), 7);
        assert_eq!(ExitStatus::from_code(255).code(), 255);
    }

    #[test]
    fn test_out_of_range_falls_back_to_failure() {
        assert_eq!(ExitStatus::from_code(-1), ExitStatus::FAILURE);
        assert_eq!(ExitStatus::from_code(256), ExitStatus::FAILURE);
        assert_eq!(ExitStatus::from_code(i32::MAX), ExitStatus::FAILURE);
        assert_eq!(ExitStatus::from_code(i32::MIN), ExitStatus::FAILURE);
    }

    #[test]
    fn test_is_success() {
        assert!(ExitStatus::SUCCESS.is_success());
        assert!(!ExitStatus::FAILURE.is_success());
        assert!(!ExitStatus::from_code(7).is_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ExitStatus::from_code(7)), "7");
    }
}
