use hudform::component::Component;
use hudform::config::ClientConfig;
use hudform::console::StdConsole;
use hudform::logging::init_logging;
use hudform::result::HudResult;
use hudform::{Acquired, InputDispatcher, InputRequest, Page, RemoteInputClient};
use tracing::{error, info};

fn main() {
    if let Err(error) = main_internal() {
        error!("Aborted with error: {:?}", error);
        std::process::exit(1);
    }
}

fn main_internal() -> HudResult<()> {
    init_logging()?;
    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "browser".to_string());
    let config = match args.next() {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    info!("Asking via {} ({}:{})", mode, config.host, config.port);

    let root = Component::form("root")
        .with_children([
            Component::header_field(
                "profile",
                2,
                "Profile",
                Component::input("name", "Name", Some("How should we call you?")),
                None,
            ),
            Component::select("theme", "Theme", ["light", "dark"]),
            Component::checkbox("notify", "Notifications", ["email", "desktop"]),
            Component::button("submit", "Save", true),
        ])?;
    let page = Page::new("Settings", root)?
        .with_description("Demo settings page")
        .with_prompt("Fill in your settings")
        .with_form(true);

    let dispatcher = InputDispatcher::new(Box::new(StdConsole), RemoteInputClient::new(config));
    let request = InputRequest::new("ask")
        .with_prompt("Type your name")
        .with_page(page);
    match dispatcher.acquire(&mode, &request)? {
        Acquired::Answers(answers) if answers.is_empty() => info!("No answers received"),
        Acquired::Answers(answers) => {
            for (id, value) in &answers {
                info!("{} = {}", id, value);
            }
        }
        Acquired::Text(text) => info!("Got '{}'", text),
        Acquired::Command { input, command } => info!("Got '{}' for command '{}'", input, command),
        Acquired::Cancelled => info!("Cancelled"),
    }
    Ok(())
}
