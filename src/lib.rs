pub mod client;
pub mod component;
pub mod config;
pub mod console;
pub mod diagnostics;
pub mod dispatch;
pub mod document;
pub mod logging;
pub mod page;
pub mod result;
#[cfg(test)]
pub mod test;

pub use client::{request_input, AnswerMapping, RemoteInputClient, RequestOutcome};
pub use component::{Component, ComponentKind};
pub use config::ClientConfig;
pub use dispatch::{Acquired, InputDispatcher, InputMode, InputRequest};
pub use page::Page;
pub use result::{HudError, HudResult};
