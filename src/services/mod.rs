pub mod client_env;

pub use client_env::ClientEnvService;
