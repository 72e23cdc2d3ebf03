//! Test helpers: an in-process HUD peer, a recording diagnostics sink and a
//! scripted console.

use crate::client::framing::read_frame;
use crate::console::ConsoleIo;
use crate::diagnostics::{DiagnosticLevel, DiagnosticsSink};
use crate::result::{HudError, HudResult};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{ErrorKind, Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub enum Reply {
    /// Writes the text back and closes the connection.
    Json(String),
    /// Never answers; waits until the client hangs up.
    Silent,
}

pub struct FakeHud {
    port: u16,
    stop: Arc<AtomicBool>,
    handle: JoinHandle<Vec<Vec<u8>>>,
}

impl FakeHud {
    pub fn spawn(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let port = listener.local_addr().unwrap().port();
        let stop = Arc::new(AtomicBool::new(false));
        let handle = thread::Builder::new()
            .name("Fake HUD".into())
            .spawn({
                let stop = stop.clone();
                move || serve(listener, reply, stop)
            })
            .unwrap();
        Self { port, stop, handle }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Stops accepting and returns the payloads of all complete frames received.
    pub fn finish(self) -> Vec<Vec<u8>> {
        self.stop.store(true, Ordering::SeqCst);
        self.handle.join().unwrap()
    }
}

fn serve(listener: TcpListener, reply: Reply, stop: Arc<AtomicBool>) -> Vec<Vec<u8>> {
    let mut payloads = Vec::new();
    while !stop.load(Ordering::SeqCst) {
        match listener.accept() {
            Ok((mut stream, _)) => {
                stream.set_nonblocking(false).unwrap();
                // The client may give up before its frame is complete.
                let Ok(payload) = read_frame(&mut stream) else {
                    continue;
                };
                payloads.push(payload);
                match &reply {
                    Reply::Json(text) => stream.write_all(text.as_bytes()).unwrap(),
                    Reply::Silent => {
                        let _ = stream.read(&mut [0u8; 1]);
                    }
                }
            }
            Err(error) if error.kind() == ErrorKind::WouldBlock => {
                thread::sleep(Duration::from_millis(5));
            }
            Err(error) => panic!("Fake HUD could not accept: {}", error),
        }
    }
    payloads
}

/// A port nothing listens on.
pub fn unused_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[derive(Debug, Clone)]
pub struct Report {
    pub name: String,
    pub message: String,
    pub level: DiagnosticLevel,
}

#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    reports: Mutex<Vec<Report>>,
}

impl RecordingDiagnostics {
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn error_pretty(&self, _error: &HudError, name: &str, message: &str, level: DiagnosticLevel) {
        self.reports.lock().unwrap().push(Report {
            name: name.to_string(),
            message: message.to_string(),
            level,
        });
    }
}

/// Console answering with prepared lines and remembering what it printed.
pub struct ScriptedConsole {
    lines: RefCell<VecDeque<String>>,
    printed: RefCell<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: RefCell::new(lines.into_iter().map(Into::into).collect()),
            printed: RefCell::new(Vec::new()),
        }
    }

    pub fn printed(&self) -> Vec<String> {
        self.printed.borrow().clone()
    }
}

impl ConsoleIo for ScriptedConsole {
    fn input_from(&self, name: &str, message: &str) -> HudResult<Option<String>> {
        self.print_from(name, message);
        Ok(self.lines.borrow_mut().pop_front())
    }

    fn print_from(&self, name: &str, message: &str) {
        self.printed
            .borrow_mut()
            .push(format!("[{}] {}", name, message));
    }
}
