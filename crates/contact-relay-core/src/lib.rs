/// Contact Relay Core - Shared library for the contact form relay function
///
/// This crate contains the data model, configuration, validation, HTML
/// composition and email provider integration used by the relay Lambda.
pub mod config;
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::RelayConfig;
pub use error::RelayError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
