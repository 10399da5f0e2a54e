mod errors;
mod signups_handler;
mod types;

pub use errors::SignupError;
pub use signups_handler::{SIGNUPS_PATH, register_signup, signup};
pub use types::{
    FormData, REGISTERED_MESSAGE, REJECTED_MESSAGE, SignupOutcome, SignupResponse,
    TRANSPORT_FAILURE_MESSAGE,
};
