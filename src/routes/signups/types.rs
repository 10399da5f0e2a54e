use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Ops! Something went wrong. Please try again.";
pub const REJECTED_MESSAGE: &str = "Failed to Register.";
pub const REGISTERED_MESSAGE: &str = "Form submitted, thank you.";

#[derive(Deserialize, Debug)]
pub struct FormData {
    pub email: Option<String>,
}

/// Result of forwarding one signup to the CMS.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    TransportFailure,
    Rejected { strapi_errors: Value },
    Registered { data: Value },
}

impl SignupOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SignupOutcome::TransportFailure => TRANSPORT_FAILURE_MESSAGE,
            SignupOutcome::Rejected { .. } => REJECTED_MESSAGE,
            SignupOutcome::Registered { .. } => REGISTERED_MESSAGE,
        }
    }
}

/// JSON shape returned to the form.
#[derive(Serialize, Debug, PartialEq)]
pub struct SignupResponse {
    #[serde(rename = "strapiErrors")]
    pub strapi_errors: Option<Value>,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<SignupOutcome> for SignupResponse {
    fn from(outcome: SignupOutcome) -> Self {
        let message = outcome.message();
        match outcome {
            SignupOutcome::TransportFailure => Self {
                strapi_errors: None,
                message,
                data: None,
            },
            SignupOutcome::Rejected { strapi_errors } => Self {
                strapi_errors: Some(strapi_errors),
                message,
                data: None,
            },
            SignupOutcome::Registered { data } => Self {
                strapi_errors: None,
                message,
                data: Some(data),
            },
        }
    }
}
