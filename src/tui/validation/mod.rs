pub mod credentials;
pub mod email;

pub use credentials::{validate_login, validate_registration, Registration, ValidationError};
pub use email::is_valid_email;
