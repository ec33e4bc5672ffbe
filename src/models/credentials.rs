use std::fmt;

use serde::Deserialize;

pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl Credentials {
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Credentials {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.access_key_id.trim().is_empty() && !self.secret_access_key.trim().is_empty()
    }
}

// Keep the secret out of logs and error output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

/// On-disk shape of `aws.yml`. Older files were written with Ruby symbol keys
/// (`:access_key_id:`), so both spellings are accepted.
#[derive(Debug, Deserialize)]
pub struct CredentialsFile {
    #[serde(default, alias = ":access_key_id")]
    pub access_key_id: Option<String>,

    #[serde(default, alias = ":secret_access_key")]
    pub secret_access_key: Option<String>,
}
