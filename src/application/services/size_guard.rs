use crate::domain::bytes_to_mib;

pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.openai.com/v1";
pub const PROVIDER_PAYLOAD_LIMIT_MIB: usize = 25;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "The Opus data exceeds the {limit_mib} MB limit for OpenAI (size: {size_mib:.2} MB)."
)]
pub struct PayloadTooLargeError {
    pub size_bytes: usize,
    pub size_mib: f64,
    pub limit_mib: usize,
}

/// Pre-flight upload limit of the hosted provider.
///
/// Only payloads headed to `restricted_base_url` are checked; self-hosted and
/// alternate endpoints accept whatever they accept.
#[derive(Debug, Clone)]
pub struct PayloadSizeGuard {
    limit_mib: usize,
    restricted_base_url: String,
}

impl PayloadSizeGuard {
    pub fn new(limit_mib: usize, restricted_base_url: impl Into<String>) -> Self {
        Self {
            limit_mib,
            restricted_base_url: restricted_base_url.into(),
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.limit_mib * 1024 * 1024
    }

    pub fn applies_to(&self, base_url: &str) -> bool {
        trim_trailing_slash(base_url) == trim_trailing_slash(&self.restricted_base_url)
    }

    pub fn check(&self, payload_len: usize, base_url: &str) -> Result<(), PayloadTooLargeError> {
        if payload_len > self.max_bytes() && self.applies_to(base_url) {
            return Err(PayloadTooLargeError {
                size_bytes: payload_len,
                size_mib: bytes_to_mib(payload_len),
                limit_mib: self.limit_mib,
            });
        }
        Ok(())
    }
}

impl Default for PayloadSizeGuard {
    fn default() -> Self {
        Self::new(PROVIDER_PAYLOAD_LIMIT_MIB, DEFAULT_PROVIDER_BASE_URL)
    }
}

fn trim_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}
