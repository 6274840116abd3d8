/// Service layer - email provider integration
pub mod provider;
pub mod resend;

pub use provider::EmailProvider;
pub use resend::ResendProvider;
