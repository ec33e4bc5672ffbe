pub mod cloud_instance;
pub mod credentials;
pub mod instance_request;
