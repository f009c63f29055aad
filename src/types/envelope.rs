use serde::{Deserialize, Serialize};

/// Outcome of one fetch: a status code and a JSON payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub code: u16,
    pub result: String,
}

impl ResultEnvelope {
    pub const OK: u16 = 200;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;

    pub fn ok(result: String) -> Self {
        Self {
            code: Self::OK,
            result,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Self::OK
    }
}
