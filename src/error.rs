use serde::Serialize;
use tracing::error;

use crate::types::ResultEnvelope;

/// Why a fetch produced no result. Every variant surfaces as a 500 envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("could not decode upstream response: {0}")]
    Decode(String),
    #[error("could not encode result: {0}")]
    Encode(String),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
            Self::Encode(_) => "encode",
        }
    }

    /// Logs the failure and collapses it into the uniform error envelope.
    pub fn into_envelope(self, operation: &'static str) -> ResultEnvelope {
        error!(operation, kind = self.kind(), error = %self, "fetch failed");

        let payload = ErrorPayload {
            code: ResultEnvelope::INTERNAL_SERVER_ERROR,
            message: self.to_string(),
        };

        ResultEnvelope {
            code: ResultEnvelope::INTERNAL_SERVER_ERROR,
            result: payload.to_json(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        // The URL carries the API key.
        Self::Transport(e.without_url().to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: u16,
    pub message: String,
}

impl ErrorPayload {
    pub fn to_json(&self) -> String {
        // A struct of a number and a string always serializes.
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"message":"internal error"}}"#, self.code)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn every_variant_becomes_a_500() {
        for err in [
            FetchError::Transport("connection refused".into()),
            FetchError::Decode("missing field `articles`".into()),
            FetchError::Encode("boom".into()),
        ] {
            let kind = err.kind();
            let envelope = err.into_envelope("headlines");
            assert_eq!(envelope.code, 500);

            let payload: serde_json::Value = serde_json::from_str(&envelope.result).unwrap();
            assert_eq!(payload["code"], 500);
            assert!(!payload["message"].as_str().unwrap().is_empty());
            assert!(logs_contain(kind));
        }
    }
}
