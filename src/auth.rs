//! Credentials and request signing for private endpoints.
//!
//! A signed call carries three extra parameters: the API key, a nonce,
//! and an HMAC-SHA256 signature over `nonce + customer_id + api_key`
//! keyed by the API secret, rendered as uppercase hex. The service
//! rejects any nonce that is not strictly greater than the last one it
//! saw for the key, so nonces are taken from the wall clock at
//! microsecond resolution.

use std::env;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::{BitstampError, Result};
use crate::transport::Params;

type HmacSha256 = Hmac<Sha256>;

const ENV_CUSTOMER_ID: &str = "BITSTAMP_CUSTOMER_ID";
const ENV_API_KEY: &str = "BITSTAMP_API_KEY";
const ENV_API_SECRET: &str = "BITSTAMP_API_SECRET";

/// Account credentials: the numeric customer id shown in account
/// settings, plus an API key/secret pair.
///
/// Held only for the duration of a call; the client never stores them.
/// The `Debug` output redacts the secret.
#[derive(Clone)]
pub struct Credentials {
    customer_id: String,
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(
        customer_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Read credentials from `BITSTAMP_CUSTOMER_ID`, `BITSTAMP_API_KEY`
    /// and `BITSTAMP_API_SECRET`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            customer_id: env_var(ENV_CUSTOMER_ID)?,
            api_key: env_var(ENV_API_KEY)?,
            api_secret: env_var(ENV_API_SECRET)?,
        })
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Compute the request signature for a given nonce: HMAC-SHA256 over
    /// the UTF-8 bytes of `nonce + customer_id + api_key`, keyed by the
    /// API secret, as uppercase hex (64 characters).
    pub fn signature(&self, nonce: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(nonce.as_bytes());
        mac.update(self.customer_id.as_bytes());
        mac.update(self.api_key.as_bytes());
        hex::encode(mac.finalize().into_bytes()).to_uppercase()
    }

    /// Append `key`, `signature` and `nonce` to an outgoing parameter
    /// set, using a fresh wall-clock nonce.
    pub fn sign_into(&self, params: &mut Params) {
        let nonce = nonce();
        let signature = self.signature(&nonce);
        params.push(("key", self.api_key.clone()));
        params.push(("signature", signature));
        params.push(("nonce", nonce));
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key_prefix: String = self.api_key.chars().take(4).collect();
        f.debug_struct("Credentials")
            .field("customer_id", &self.customer_id)
            .field("api_key", &format!("{key_prefix}..."))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Current wall-clock time in microseconds, as a decimal string.
///
/// No lock and no shared counter: two calls in the same microsecond
/// produce the same nonce and the service rejects the second. That
/// window is a known limitation of the time-derived scheme, not
/// something this layer papers over.
pub fn nonce() -> String {
    nonce_at(SystemTime::now())
}

/// Nonce for an explicit instant. `nonce()` with the clock injected.
pub fn nonce_at(now: SystemTime) -> String {
    now.duration_since(UNIX_EPOCH)
        .expect("system clock is before the Unix epoch")
        .as_micros()
        .to_string()
}

fn env_var(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| BitstampError::EnvVarNotSet(name.to_string()))
}
