/// Data models for the contact relay
pub mod email;
pub mod outcome;
pub mod submission;

pub use email::*;
pub use outcome::*;
pub use submission::*;
