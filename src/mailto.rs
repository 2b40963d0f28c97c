//! `mailto:` URIs with a pre-filled subject.
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

const SCHEME: &str = "mailto:";

/// A mail-compose URI addressed to a single recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoUri {
    pub recipient: String,
    pub subject: Option<String>,
}

impl MailtoUri {
    pub fn new<T>(recipient: T) -> Self
    where
        T: ToString,
    {
        Self {
            recipient: recipient.to_string(),
            subject: None,
        }
    }

    pub fn subject<T>(mut self, subject: T) -> Self
    where
        T: ToString,
    {
        self.subject = Some(subject.to_string());
        self
    }
}

impl Display for MailtoUri {
    /// Writes the URI with the subject percent-encoded, e.g. spaces become `%20` and `ä` becomes
    /// `%C3%A4`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SCHEME, self.recipient)?;

        if let Some(subject) = &self.subject {
            write!(f, "?subject={}", urlencoding::encode(subject))?;
        }

        Ok(())
    }
}

impl FromStr for MailtoUri {
    type Err = ParseMailtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(SCHEME)
            .ok_or(ParseMailtoError::InvalidScheme)?;

        let (recipient, query) = match rest.split_once('?') {
            Some((recipient, query)) => (recipient, Some(query)),
            None => (rest, None),
        };

        if recipient.is_empty() {
            return Err(ParseMailtoError::MissingRecipient);
        }

        let mut uri = Self::new(urlencoding::decode(recipient)?);

        for pair in query.into_iter().flat_map(|q| q.split('&')) {
            if let Some(value) = pair.strip_prefix("subject=") {
                uri.subject = Some(urlencoding::decode(value)?.into_owned());
            }
        }

        Ok(uri)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseMailtoError {
    #[error("not a mailto uri")]
    InvalidScheme,
    #[error("missing recipient")]
    MissingRecipient,
    #[error("invalid percent-encoding: {0}")]
    InvalidEncoding(String),
}

impl From<std::string::FromUtf8Error> for ParseMailtoError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::InvalidEncoding(err.to_string())
    }
}
