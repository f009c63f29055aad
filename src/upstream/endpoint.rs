use std::fmt;

use crate::types::RequestParams;

/// Base URL plus API key, ready to have query parameters appended.
#[derive(Clone)]
pub struct Endpoint {
    base_url: String,
    key_prefix: String,
    key_token: String,
}

impl Endpoint {
    pub fn new(base_url: &str, key_prefix: &str, key_token: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            key_prefix: key_prefix.to_string(),
            key_token: key_token.to_string(),
        }
    }

    /// Plain concatenation. Parameter names and values are not escaped.
    pub fn url(&self, params: &RequestParams) -> String {
        let mut url = format!("{}{}{}", self.base_url, self.key_prefix, self.key_token);
        for (name, value) in params.iter() {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url)
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}
