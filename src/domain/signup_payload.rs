use serde::Serialize;

use super::SignupEmail;

/// Body of the CMS create call: the email wrapped under `data`.
#[derive(Serialize, Debug)]
pub struct SignupPayload<'a> {
    data: SignupData<'a>,
}

#[derive(Serialize, Debug)]
struct SignupData<'a> {
    email: &'a str,
}

impl<'a> SignupPayload<'a> {
    pub fn new(email: &'a SignupEmail) -> Self {
        Self {
            data: SignupData {
                email: email.as_ref(),
            },
        }
    }
}
