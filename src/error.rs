use thiserror::Error;

/// A failure while building or inserting the launcher.
///
/// Host errors are carried as their debug representation since a `JsValue` is neither `Send`
/// nor `Display`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no document present")]
    NoDocument,
    #[error("failed to create <{tag}>: {message}")]
    CreateElement { tag: &'static str, message: String },
    #[error("failed to set attribute {name}: {message}")]
    SetAttribute { name: &'static str, message: String },
    #[error("failed to set style {property}: {message}")]
    SetStyle {
        property: &'static str,
        message: String,
    },
    #[error("failed to append child: {0}")]
    AppendChild(String),
    #[error("failed to register {event} listener: {message}")]
    Listener { event: &'static str, message: String },
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
