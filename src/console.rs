use crate::diagnostics::{DiagnosticLevel, DiagnosticsSink};
use crate::result::HudResult;
use std::io::{self, BufRead, Write};

pub const INPUT_MESSAGE: &str = "Input (Ctrl+C to cancel)";
pub const MODE_NOT_FOUND_MESSAGE: &str = "Mode not found. Query cancelled";

/// Line based console used for local input.
pub trait ConsoleIo {
    /// Reads one line, `None` once the input is exhausted.
    fn input_from(&self, name: &str, message: &str) -> HudResult<Option<String>>;
    fn print_from(&self, name: &str, message: &str);
}

/// Console on stdin and stdout, prefixing every line with `[name]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl ConsoleIo for StdConsole {
    fn input_from(&self, name: &str, message: &str) -> HudResult<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "[{}] {}: ", name, message)?;
        stdout.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print_from(&self, name: &str, message: &str) {
        println!("[{}] {}", name, message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Text(String),
    /// A command token was found in the line; `input` is the rest of it.
    Command { input: String, command: String },
    Cancelled,
}

/// Prompts for one line of input.
///
/// With `commands` given, the first token contained in the line is split off
/// and returned as the command; a line without any of them cancels the query.
/// A failed read is reported to `diagnostics` and cancels the query as well.
pub fn acquire_from_console(
    console: &dyn ConsoleIo,
    diagnostics: &dyn DiagnosticsSink,
    name: &str,
    prompt: Option<&str>,
    commands: &[String],
) -> ConsoleInput {
    if let Some(prompt) = prompt.filter(|prompt| !prompt.is_empty()) {
        console.print_from(name, prompt);
    }
    let input = match console.input_from(name, INPUT_MESSAGE) {
        Ok(Some(input)) => input,
        Ok(None) => return ConsoleInput::Cancelled,
        Err(error) => {
            diagnostics.error_pretty(&error, name, "Failed to read input", DiagnosticLevel::Error);
            return ConsoleInput::Cancelled;
        }
    };
    if commands.is_empty() {
        return ConsoleInput::Text(input);
    }
    match commands
        .iter()
        .find(|command| !command.is_empty() && input.contains(command.as_str()))
    {
        Some(command) => ConsoleInput::Command {
            input: input.replace(command.as_str(), "").trim().to_string(),
            command: command.clone(),
        },
        None => {
            console.print_from(name, MODE_NOT_FOUND_MESSAGE);
            ConsoleInput::Cancelled
        }
    }
}
