use std::path::Path;

use env_logger::Env;

use crate::error::Result;
use crate::models::cloud_instance::ProviderResponse;
use crate::models::credentials::Credentials;
use crate::models::instance_request::InstanceRequest;
use crate::services::aws_service::{provision, Ec2Provider, InstanceProvider};
use crate::services::config_service::{load_credentials, CONFIG_PATH};

mod error;
mod models;
mod services;
#[cfg(test)]
mod util;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let response = run(Path::new(CONFIG_PATH), Ec2Provider::new).await?;
    if let Some(reservation_id) = response.reservation_id {
        log::info!("Reservation {} created", reservation_id);
    }

    Ok(())
}

async fn run<F, P>(config_path: &Path, connect: F) -> Result<ProviderResponse>
where
    F: FnOnce(&Credentials) -> Result<P>,
    P: InstanceProvider,
{
    let credentials = load_credentials(config_path)?;
    let provider = connect(&credentials)?;

    provision(&provider, &credentials, &InstanceRequest::default()).await
}
