//! Domain models with validation

mod contact;
mod credentials;
mod validation;

pub use contact::{Contact, ContactFields};
pub use credentials::{Credentials, LoginRequest};
pub use validation::ValidationError;
