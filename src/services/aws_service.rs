use async_trait::async_trait;
use rusoto_core::{HttpClient, RusotoError};
use rusoto_credential::StaticProvider;
use rusoto_ec2::{Ec2, Ec2Client, Placement, RunInstancesError, RunInstancesRequest};

use crate::error::{ProvisionError, Result};
use crate::models::cloud_instance::ProviderResponse;
use crate::models::credentials::Credentials;
use crate::models::instance_request::{InstanceRequest, Visibility, REGION};

// EC2 error codes that mean the caller's keys were refused.
const AUTH_ERROR_CODES: [&str; 4] = [
    "AuthFailure",
    "InvalidClientTokenId",
    "SignatureDoesNotMatch",
    "UnauthorizedOperation",
];

#[async_trait]
pub trait InstanceProvider {
    async fn run_instances(&self, request: &InstanceRequest) -> Result<ProviderResponse>;
}

pub struct Ec2Provider {
    client: Ec2Client,
}

impl Ec2Provider {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let http_client = HttpClient::new().map_err(|err| {
            ProvisionError::ProviderError(format!("Failed to create HTTP client: {}", err))
        })?;
        let credentials_provider = StaticProvider::new_minimal(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.clone(),
        );

        Ok(Ec2Provider {
            client: Ec2Client::new_with(http_client, credentials_provider, REGION),
        })
    }
}

#[async_trait]
impl InstanceProvider for Ec2Provider {
    async fn run_instances(&self, request: &InstanceRequest) -> Result<ProviderResponse> {
        let run_instance_req = create_instance_request(request)?;
        let reservation = self
            .client
            .run_instances(run_instance_req)
            .await
            .map_err(classify_error)?;

        Ok(ProviderResponse::from(reservation))
    }
}

/// Issues exactly one launch call. There is no retry; a second call to this
/// function launches a second instance.
pub async fn provision<P>(
    provider: &P,
    credentials: &Credentials,
    request: &InstanceRequest,
) -> Result<ProviderResponse>
where
    P: InstanceProvider + ?Sized,
{
    if !credentials.is_complete() {
        return Err(ProvisionError::ConfigMalformed(
            "Credentials must not be empty".to_string(),
        ));
    }

    log::info!(
        "Launching {}..{} instance(s) of {} in groups {:?}",
        request.min_count,
        request.max_count,
        request.image_id,
        request.security_groups
    );

    match provider.run_instances(request).await {
        Ok(response) => {
            for instance in &response.instances {
                log::info!("Launched instance {} ({})", instance.id, instance.state);
            }
            Ok(response)
        }
        Err(err @ ProvisionError::AuthenticationError(_)) => {
            log::warn!("{}", err);
            Err(err)
        }
        Err(err) => {
            log::error!("{}", err);
            Err(err)
        }
    }
}

fn create_instance_request(request: &InstanceRequest) -> Result<RunInstancesRequest> {
    // Public addressing is what the default VPC hands out already.
    if request.visibility != Visibility::Public {
        return Err(ProvisionError::ProviderError(format!(
            "Unsupported visibility: {}",
            request.visibility.as_str()
        )));
    }

    let placement = if request.availability_zone.is_empty() {
        None
    } else {
        Some(Placement {
            availability_zone: Some(request.availability_zone.clone()),
            ..Default::default()
        })
    };

    Ok(RunInstancesRequest {
        image_id: Some(request.image_id.clone()),
        min_count: request.min_count,
        max_count: request.max_count,
        security_groups: Some(request.security_groups.clone()),
        key_name: Some(request.placement_hint.clone()),
        placement,
        ..Default::default()
    })
}

fn classify_error(err: RusotoError<RunInstancesError>) -> ProvisionError {
    match err {
        RusotoError::Credentials(err) => ProvisionError::AuthenticationError(err.to_string()),
        RusotoError::Unknown(response) => {
            classify_response(response.status.as_u16(), response.body_as_str())
        }
        other => ProvisionError::ProviderError(other.to_string()),
    }
}

fn classify_response(status: u16, body: &str) -> ProvisionError {
    let auth_code = AUTH_ERROR_CODES
        .iter()
        .any(|code| body.contains(&format!("<Code>{}</Code>", code)));

    if status == 401 || status == 403 || auth_code {
        ProvisionError::AuthenticationError(format!("HTTP {}: {}", status, body))
    } else {
        ProvisionError::ProviderError(format!("HTTP {}: {}", status, body))
    }
}
