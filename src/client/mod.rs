//! Blocking client that asks the HUD to collect input for a page.

pub mod failure;
pub mod framing;

use crate::client::failure::{AttemptFailure, FailureReason};
use crate::client::framing::{decode_answers, encode_frame, read_response, write_frame};
use crate::config::ClientConfig;
use crate::diagnostics::{DiagnosticLevel, DiagnosticsSink, TracingDiagnostics};
use crate::err;
use crate::page::Page;
use serde_json::{Map, Value};
use std::io::{self, ErrorKind};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Field id to the value the HUD collected for it.
pub type AnswerMapping = Map<String, Value>;

const DIAGNOSTICS_NAME: &str = "HUD Input";

/// Result of a request together with how it was obtained.
///
/// `failure` is `None` when the HUD answered, even if the answer is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOutcome {
    pub answers: AnswerMapping,
    pub attempts: u32,
    pub failure: Option<FailureReason>,
}

impl RequestOutcome {
    fn failed(attempts: u32, failure: FailureReason) -> Self {
        Self {
            answers: AnswerMapping::new(),
            attempts,
            failure: Some(failure),
        }
    }

    pub fn is_answered(&self) -> bool {
        self.failure.is_none()
    }
}

pub struct RemoteInputClient {
    config: ClientConfig,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl RemoteInputClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends `page` and waits for the answers. Every failure ends up as an
    /// empty mapping; use [`Self::request_outcome`] to tell them apart.
    pub fn request(&self, page: &Page) -> AnswerMapping {
        self.request_outcome(page).answers
    }

    /// Nothing is sent when the configuration does not validate.
    pub fn request_outcome(&self, page: &Page) -> RequestOutcome {
        if let Err(error) = self.config.validate() {
            self.diagnostics.error_pretty(
                &error,
                DIAGNOSTICS_NAME,
                "Refusing to send request",
                DiagnosticLevel::Error,
            );
            return RequestOutcome::failed(0, FailureReason::InvalidConfig);
        }
        debug!(
            "Requesting input for page '{}' from {}:{}\n{}",
            page.title(),
            self.config.host,
            self.config.port,
            page.root().to_tree_string()
        );
        let frame = match page.to_payload().and_then(|payload| encode_frame(&payload)) {
            Ok(frame) => frame,
            Err(error) => {
                self.diagnostics.error_pretty(
                    &error,
                    DIAGNOSTICS_NAME,
                    "Failed to encode page",
                    DiagnosticLevel::Error,
                );
                return RequestOutcome::failed(0, FailureReason::Unexpected);
            }
        };

        let max_attempts = self.config.max_attempts;
        let mut last_failure = FailureReason::Unexpected;
        for attempt in 1..=max_attempts {
            debug!("Sending {} byte frame, attempt {}/{}", frame.len(), attempt, max_attempts);
            match self.attempt(&frame) {
                Ok(answers) => {
                    debug!("Received {} answers", answers.len());
                    return RequestOutcome {
                        answers,
                        attempts: attempt,
                        failure: None,
                    };
                }
                Err(failure) => {
                    self.report(&failure, attempt, max_attempts);
                    if failure.reason.is_terminal() {
                        return RequestOutcome::failed(attempt, failure.reason);
                    }
                    last_failure = failure.reason;
                }
            }
        }
        RequestOutcome::failed(max_attempts, last_failure)
    }

    /// One connection, one frame, one response. The stream is dropped, and
    /// thereby closed, on every path out of this function.
    fn attempt(&self, frame: &[u8]) -> Result<AnswerMapping, AttemptFailure> {
        let timeout = self.config.timeout();
        let addresses = resolve(&self.config.host, self.config.port)?;
        let mut stream = connect(&addresses, timeout)?;
        stream
            .set_read_timeout(Some(timeout))
            .map_err(AttemptFailure::io)?;
        stream
            .set_write_timeout(Some(timeout))
            .map_err(AttemptFailure::io)?;
        write_frame(&mut stream, frame).map_err(AttemptFailure::io)?;
        let response = read_response(&mut stream, self.config.receive_buffer_size)
            .map_err(AttemptFailure::io)?;
        decode_answers(&response)
            .map_err(|error| AttemptFailure::new(FailureReason::MalformedResponse, error))
    }

    fn report(&self, failure: &AttemptFailure, attempt: u32, max_attempts: u32) {
        let (outcome, level) = if failure.reason.is_terminal() {
            ("giving up", DiagnosticLevel::Error)
        } else if attempt < max_attempts {
            ("retrying", DiagnosticLevel::Warning)
        } else {
            ("no attempts left", DiagnosticLevel::Error)
        };
        let message = format!(
            "{} (attempt {}/{}), {}",
            failure.reason, attempt, max_attempts, outcome
        );
        self.diagnostics
            .error_pretty(&failure.error, DIAGNOSTICS_NAME, &message, level);
    }
}

fn resolve(host: &str, port: u16) -> Result<Vec<SocketAddr>, AttemptFailure> {
    let addresses: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(AttemptFailure::resolution)?
        .collect();
    if addresses.is_empty() {
        return Err(AttemptFailure::new(
            FailureReason::Resolution,
            err!("No address found for host '{}'", host),
        ));
    }
    Ok(addresses)
}

fn connect(addresses: &[SocketAddr], timeout: Duration) -> Result<TcpStream, AttemptFailure> {
    let mut last_error = io::Error::from(ErrorKind::NotConnected);
    for address in addresses {
        match TcpStream::connect_timeout(address, timeout) {
            Ok(stream) => return Ok(stream),
            Err(error) => {
                debug!("Could not connect to {}: {}", address, error);
                last_error = error;
            }
        }
    }
    Err(AttemptFailure::io(last_error))
}

/// Asks the HUD at `host:port` for input, waiting at most `timeout` per attempt.
pub fn request_input(page: &Page, host: &str, port: u16, timeout: Duration) -> AnswerMapping {
    let config = ClientConfig::new(host, port).with_timeout(timeout);
    RemoteInputClient::new(config).request(page)
}
