use crate::result::HudError;
use std::fmt::{Display, Formatter};
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

impl Display for DiagnosticLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DiagnosticLevel::Warning => "WARNING",
            DiagnosticLevel::Error => "ERROR",
        })
    }
}

/// Receives failure reports. Purely observational.
pub trait DiagnosticsSink: Send + Sync {
    fn error_pretty(&self, error: &HudError, name: &str, message: &str, level: DiagnosticLevel);
}

/// Forwards reports to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn error_pretty(&self, error: &HudError, name: &str, message: &str, level: DiagnosticLevel) {
        match level {
            DiagnosticLevel::Warning => warn!("[{}] {}: {}", name, message, error),
            DiagnosticLevel::Error => error!("[{}] {}: {:?}", name, message, error),
        }
    }
}
