use crate::result::{HudError, HudResult};
use tracing::Level;

pub fn init_logging() -> HudResult<()> {
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_max_level(Level::DEBUG)
        .try_init()
        .map_err(|error| HudError::from(error.to_string().as_str()))?;
    Ok(())
}
