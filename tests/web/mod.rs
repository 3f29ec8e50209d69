pub mod client_env_tests;
pub mod health_tests;
