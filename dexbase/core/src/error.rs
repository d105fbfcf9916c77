use std::sync::Arc;

/// Every way a workflow can fail.
///
/// The [`Display`](std::fmt::Display) output is the message shown next to the
/// panel that failed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("{message}")]
    Malformed { message: String },
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub fn api(status: u16, message: Option<String>, fallback: &str) -> Self {
        Self::Api {
            status,
            message: message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| fallback.to_owned()),
        }
    }

    pub fn malformed(fallback: &str) -> Self {
        Self::Malformed {
            message: fallback.to_owned(),
        }
    }

    pub fn transport(
        fallback: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            message: fallback.to_owned(),
            source: Arc::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn api_error_prefers_payload_message() {
        let error = Error::api(404, Some("no existe".to_owned()), "fallback");

        assert_eq!(error.to_string(), "no existe");
    }

    #[test]
    fn api_error_falls_back_when_message_is_missing_or_blank() {
        assert_eq!(Error::api(500, None, "fallback").to_string(), "fallback");
        assert_eq!(
            Error::api(500, Some("  ".to_owned()), "fallback").to_string(),
            "fallback"
        );
    }
}
