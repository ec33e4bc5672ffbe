use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ProvisionError, Result};
use crate::models::credentials::{Credentials, CredentialsFile};

pub const CONFIG_PATH: &str = "aws.yml";

pub fn load_credentials(path: impl AsRef<Path>) -> Result<Credentials> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ProvisionError::ConfigNotFound(path.display().to_string()),
        _ => ProvisionError::ConfigMalformed(format!(
            "Failed to read {}: {}",
            path.display(),
            err
        )),
    })?;

    let file: CredentialsFile = serde_yaml::from_str(&contents).map_err(|err| {
        ProvisionError::ConfigMalformed(format!("Failed to parse {}: {}", path.display(), err))
    })?;

    let credentials = Credentials::new(
        &required_field(file.access_key_id, "access_key_id")?,
        &required_field(file.secret_access_key, "secret_access_key")?,
    );

    log::info!("Loaded credentials from {}", path.display());
    Ok(credentials)
}

fn required_field(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ProvisionError::ConfigMalformed(format!(
            "Missing required field: {}",
            name
        ))),
    }
}
