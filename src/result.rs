use error_stack::Report;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug)]
pub enum HudErrorKind {
    #[error("General Error: {0}")]
    General(String),
    #[error("Invalid input mode '{mode}', expected one of: {expected}")]
    InvalidMode { mode: String, expected: String },
    #[error("Invalid props for '{kind}': {message}")]
    InvalidProps { kind: String, message: String },
    #[error("Component '{0}' is not a container")]
    NotAContainer(String),
    #[error("IO Error: {0}")]
    Io(String),
    #[error("JSON Error: {0}")]
    Json(String),
    #[error("Config Error: {0}")]
    Config(String),
}

#[derive(Debug)]
pub struct HudError(pub Report<HudErrorKind>);

impl Display for HudError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl HudError {
    #[track_caller]
    pub fn new(error: HudErrorKind) -> HudError {
        HudError(Report::new(error))
    }

    #[track_caller]
    pub fn change_context<S: Into<String>>(self, message: S) -> Self {
        Self(
            self.0
                .change_context(HudErrorKind::General(message.into())),
        )
    }

    pub fn kind(&self) -> &HudErrorKind {
        self.0.current_context()
    }

    /// The io error this report was built from, if any.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        self.0.downcast_ref::<std::io::Error>()
    }
}

pub type HudResult<T> = Result<T, HudError>;

impl<T> From<T> for HudError
where
    for<'a> &'a T: Into<HudErrorKind>,
    T: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(error: T) -> Self {
        let kind: HudErrorKind = (&error).into();
        let report = Report::new(error);
        let report = report.change_context(kind);
        Self(report)
    }
}

impl From<&std::io::Error> for HudErrorKind {
    #[track_caller]
    fn from(error: &std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<&serde_json::Error> for HudErrorKind {
    #[track_caller]
    fn from(error: &serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl From<&serde_yml::Error> for HudErrorKind {
    #[track_caller]
    fn from(error: &serde_yml::Error) -> Self {
        Self::Config(error.to_string())
    }
}

impl From<String> for HudErrorKind {
    #[track_caller]
    fn from(error: String) -> Self {
        Self::General(error)
    }
}

impl From<&str> for HudError {
    #[track_caller]
    fn from(error: &str) -> Self {
        Self(Report::new(HudErrorKind::General(error.to_string())))
    }
}

#[macro_export]
macro_rules! bail {
    ($($args:tt)+) => {
        return Err($crate::result::HudError::new($crate::result::HudErrorKind::General(format!($($args)+).into())))
    }
}

#[macro_export]
macro_rules! err {
    ($($args:tt)+) => {
        $crate::result::HudError::new($crate::result::HudErrorKind::General(format!($($args)+).into()))
    };
}

#[macro_export]
macro_rules! context {
    ($fmt:expr $(, $($args:expr),+)? => $block:block) => {
        {
            $block
        }.map_err(|e: $crate::result::HudError| e.change_context(format!(concat!("Failed to ",$fmt) $(, $($args)+)?)))
    };
}
pub use context;
