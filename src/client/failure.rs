use crate::result::HudError;
use std::fmt::{Display, Formatter};
use std::io::{self, ErrorKind};

/// Why a single request attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Refused, reset or aborted by the peer.
    Connection,
    /// The host name could not be resolved.
    Resolution,
    /// No answer before the timeout elapsed.
    Timeout,
    /// The peer answered with something that is not a JSON object.
    MalformedResponse,
    /// The client configuration was rejected before anything was sent.
    InvalidConfig,
    Unexpected,
}

impl FailureReason {
    /// Terminal failures end the request instead of being retried.
    pub fn is_terminal(self) -> bool {
        matches!(self, FailureReason::Timeout)
    }

    pub fn from_io_error(error: &io::Error) -> Self {
        match error.kind() {
            ErrorKind::ConnectionRefused
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected
            | ErrorKind::BrokenPipe => FailureReason::Connection,
            ErrorKind::TimedOut | ErrorKind::WouldBlock => FailureReason::Timeout,
            _ => FailureReason::Unexpected,
        }
    }
}

impl Display for FailureReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FailureReason::Connection => "Connection to the HUD failed",
            FailureReason::Resolution => "Could not resolve the HUD host",
            FailureReason::Timeout => "Timed out waiting for the HUD",
            FailureReason::MalformedResponse => "Malformed response from the HUD",
            FailureReason::InvalidConfig => "Invalid client configuration",
            FailureReason::Unexpected => "Unexpected error",
        })
    }
}

#[derive(Debug)]
pub struct AttemptFailure {
    pub reason: FailureReason,
    pub error: HudError,
}

impl AttemptFailure {
    pub fn new(reason: FailureReason, error: impl Into<HudError>) -> Self {
        Self {
            reason,
            error: error.into(),
        }
    }

    pub fn io(error: io::Error) -> Self {
        Self::new(FailureReason::from_io_error(&error), error)
    }

    pub fn resolution(error: io::Error) -> Self {
        Self::new(FailureReason::Resolution, error)
    }
}

#[cfg(test)]
mod tests {
    use super::{AttemptFailure, FailureReason};
    use std::io::{self, ErrorKind};

    fn classify(kind: ErrorKind) -> FailureReason {
        AttemptFailure::io(io::Error::from(kind)).reason
    }

    #[test]
    fn test_io_error_classification() {
        assert_eq!(classify(ErrorKind::ConnectionRefused), FailureReason::Connection);
        assert_eq!(classify(ErrorKind::ConnectionReset), FailureReason::Connection);
        assert_eq!(classify(ErrorKind::TimedOut), FailureReason::Timeout);
        assert_eq!(classify(ErrorKind::WouldBlock), FailureReason::Timeout);
        assert_eq!(classify(ErrorKind::PermissionDenied), FailureReason::Unexpected);
    }

    #[test]
    fn test_only_timeout_is_terminal() {
        assert!(FailureReason::Timeout.is_terminal());
        for reason in [
            FailureReason::Connection,
            FailureReason::Resolution,
            FailureReason::MalformedResponse,
            FailureReason::InvalidConfig,
            FailureReason::Unexpected,
        ] {
            assert!(!reason.is_terminal(), "{:?} should be retried", reason);
        }
    }

    #[test]
    fn test_resolution_keeps_source() {
        let failure = AttemptFailure::resolution(io::Error::other("no such host"));
        assert_eq!(failure.reason, FailureReason::Resolution);
        assert_eq!(
            failure.error.io_error().map(|error| error.to_string()),
            Some("no such host".to_string())
        );
    }
}
