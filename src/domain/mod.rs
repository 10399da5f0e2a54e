mod signup_email;
mod signup_payload;

pub use signup_email::{EmailValidationError, SignupEmail};
pub use signup_payload::SignupPayload;
