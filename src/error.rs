use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Malformed config: {0}")]
    ConfigMalformed(String),

    #[error("Provider rejected credentials: {0}")]
    AuthenticationError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
