use crate::bail;
use crate::client::{AnswerMapping, RemoteInputClient};
use crate::config::ClientConfig;
use crate::console::{acquire_from_console, ConsoleInput, ConsoleIo, StdConsole};
use crate::diagnostics::{DiagnosticsSink, TracingDiagnostics};
use crate::page::Page;
use crate::result::{HudError, HudErrorKind, HudResult};
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Console,
    Browser,
}

impl InputMode {
    pub const ALL: [InputMode; 2] = [InputMode::Console, InputMode::Browser];

    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Console => "console",
            InputMode::Browser => "browser",
        }
    }
}

impl Display for InputMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = HudError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        InputMode::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == mode)
            .ok_or_else(|| {
                HudError::new(HudErrorKind::InvalidMode {
                    mode: mode.to_string(),
                    expected: InputMode::ALL.iter().join(", "),
                })
            })
    }
}

/// Parameters of one input acquisition.
#[derive(Debug, Clone, Default)]
pub struct InputRequest {
    pub name: String,
    pub prompt: Option<String>,
    pub commands: Vec<String>,
    pub page: Option<Page>,
}

impl InputRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_commands(mut self, commands: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.commands = commands.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Acquired {
    Text(String),
    Command { input: String, command: String },
    Answers(AnswerMapping),
    Cancelled,
}

impl From<ConsoleInput> for Acquired {
    fn from(input: ConsoleInput) -> Self {
        match input {
            ConsoleInput::Text(text) => Acquired::Text(text),
            ConsoleInput::Command { input, command } => Acquired::Command { input, command },
            ConsoleInput::Cancelled => Acquired::Cancelled,
        }
    }
}

/// Routes an input request to the console or to the HUD.
pub struct InputDispatcher {
    console: Box<dyn ConsoleIo>,
    client: RemoteInputClient,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(
            Box::new(StdConsole),
            RemoteInputClient::new(ClientConfig::default()),
        )
    }
}

impl InputDispatcher {
    pub fn new(console: Box<dyn ConsoleIo>, client: RemoteInputClient) -> Self {
        Self {
            console,
            client,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Sink for console read failures; the client keeps its own.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn acquire(&self, mode: &str, request: &InputRequest) -> HudResult<Acquired> {
        let mode: InputMode = mode.parse()?;
        self.acquire_with(mode, request)
    }

    pub fn acquire_with(&self, mode: InputMode, request: &InputRequest) -> HudResult<Acquired> {
        debug!("Acquiring input for '{}' via {}", request.name, mode);
        match mode {
            InputMode::Console => Ok(acquire_from_console(
                self.console.as_ref(),
                self.diagnostics.as_ref(),
                &request.name,
                request.prompt.as_deref(),
                &request.commands,
            )
            .into()),
            InputMode::Browser => {
                let Some(page) = &request.page else {
                    bail!("Browser input for '{}' needs a page", request.name);
                };
                Ok(Acquired::Answers(self.client.request(page)))
            }
        }
    }
}
