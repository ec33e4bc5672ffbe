pub mod aws_service;
pub mod config_service;
