use crate::Error;
use crate::generation::Generation;

/// An inline message shown next to a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub text: String,
    pub tone: Tone,
    announcement: Option<Generation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Error,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Info,
            announcement: None,
        }
    }

    pub fn error(error: &Error) -> Self {
        Self {
            text: error.to_string(),
            tone: Tone::Error,
            announcement: None,
        }
    }

    /// An info message that clears itself once its [`Generation`] expires.
    pub fn announcement(text: impl Into<String>, generation: Generation) -> Self {
        Self {
            announcement: Some(generation),
            ..Self::info(text)
        }
    }

    pub fn is_announcement(&self, generation: Generation) -> bool {
        self.announcement == Some(generation)
    }
}
