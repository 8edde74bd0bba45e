//! Access-key credentials.
//!
//! NLB requests are signed with a RAM access-key pair. Secrets are held in
//! [`SecretString`] so they never appear in `Debug` output or log lines.

use secrecy::SecretString;

use crate::error::Error;

/// Environment variables checked by [`Credential::from_env`].
///
/// These are the names shared by all official Alibaba Cloud SDKs, so
/// credentials configured for `aliyun` CLI or any other SDK are picked up
/// unchanged.
pub const ENV_ACCESS_KEY_ID: &str = "ALIBABA_CLOUD_ACCESS_KEY_ID";
pub const ENV_ACCESS_KEY_SECRET: &str = "ALIBABA_CLOUD_ACCESS_KEY_SECRET";
pub const ENV_SECURITY_TOKEN: &str = "ALIBABA_CLOUD_SECURITY_TOKEN";

/// A RAM access-key pair, optionally with an STS security token.
#[derive(Debug, Clone)]
pub struct Credential {
    /// The public access-key identifier (`LTAI...`).
    pub access_key_id: String,
    /// The signing secret.
    pub access_key_secret: SecretString,
    /// STS session token for temporary credentials. Sent as the
    /// `SecurityToken` parameter when present.
    pub security_token: Option<SecretString>,
}

impl Credential {
    /// Build from an explicit key pair.
    pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            access_key_secret: SecretString::from(access_key_secret.into()),
            security_token: None,
        }
    }

    /// Attach an STS security token (temporary credentials).
    pub fn with_security_token(mut self, token: impl Into<String>) -> Self {
        self.security_token = Some(SecretString::from(token.into()));
        self
    }

    /// Resolve credentials from the standard environment variables.
    ///
    /// Requires `ALIBABA_CLOUD_ACCESS_KEY_ID` and
    /// `ALIBABA_CLOUD_ACCESS_KEY_SECRET`; `ALIBABA_CLOUD_SECURITY_TOKEN`
    /// is optional.
    pub fn from_env() -> Result<Self, Error> {
        let access_key_id = read_env(ENV_ACCESS_KEY_ID)?;
        let access_key_secret = read_env(ENV_ACCESS_KEY_SECRET)?;

        let security_token = std::env::var(ENV_SECURITY_TOKEN)
            .ok()
            .filter(|v| !v.is_empty())
            .map(SecretString::from);

        Ok(Self {
            access_key_id,
            access_key_secret: SecretString::from(access_key_secret),
            security_token,
        })
    }
}

fn read_env(name: &str) -> Result<String, Error> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingCredentials {
            message: format!("environment variable {name} is not set"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_does_not_leak_secret() {
        let cred = Credential::new("LTAItest", "super-secret-value");
        let rendered = format!("{cred:?}");
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("LTAItest"));
    }
}
