use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::{ProvisionError, Result};
use crate::models::cloud_instance::{CloudInstance, ProviderResponse};
use crate::models::instance_request::InstanceRequest;
use crate::services::aws_service::InstanceProvider;

pub fn generate_random_string(n: usize) -> String {
    let rng = rand::thread_rng();
    rng.sample_iter(&Alphanumeric)
        .map(char::from)
        .take(n)
        .collect()
}

/// Writes `contents` to a uniquely named YAML file in the temp dir.
pub fn write_temp_config(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("aws-{}.yml", generate_random_string(12)));
    std::fs::write(&path, contents).expect("Failed to write temp config");
    path
}

/// Stand-in for EC2 that records every request it receives. Clones share the
/// same record.
#[derive(Clone)]
pub struct MockProvider {
    accept: bool,
    calls: Arc<Mutex<Vec<InstanceRequest>>>,
    launched: Arc<Mutex<Vec<CloudInstance>>>,
}

impl MockProvider {
    pub fn accepting() -> Self {
        Self::new(true)
    }

    pub fn rejecting_credentials() -> Self {
        Self::new(false)
    }

    fn new(accept: bool) -> Self {
        MockProvider {
            accept,
            calls: Arc::new(Mutex::new(vec![])),
            launched: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn calls(&self) -> Vec<InstanceRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn launched(&self) -> Vec<CloudInstance> {
        self.launched.lock().unwrap().clone()
    }
}

#[async_trait]
impl InstanceProvider for MockProvider {
    async fn run_instances(&self, request: &InstanceRequest) -> Result<ProviderResponse> {
        self.calls.lock().unwrap().push(request.clone());

        if !self.accept {
            return Err(ProvisionError::AuthenticationError(
                "AuthFailure: AWS was not able to validate the provided access credentials"
                    .to_string(),
            ));
        }

        let instance = CloudInstance {
            id: format!("i-{}", generate_random_string(17).to_lowercase()),
            state: "pending".to_string(),
        };
        self.launched.lock().unwrap().push(instance.clone());

        Ok(ProviderResponse {
            reservation_id: Some(format!("r-{}", generate_random_string(17).to_lowercase())),
            instances: vec![instance],
        })
    }
}
