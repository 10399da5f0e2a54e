use actix_web::{HttpResponse, web};
use reqwest::Method;

use crate::{
    cms_client::{CmsClient, MutationOutcome},
    domain::{SignupEmail, SignupPayload},
};

use super::{
    errors::SignupError,
    types::{FormData, SignupOutcome, SignupResponse},
};

pub const SIGNUPS_PATH: &str = "/api/signups";

#[tracing::instrument(
    name = "Handling a signup form submission",
    skip(form, cms_client),
    fields(signup_email = ?form.email)
)]
pub async fn signup(
    form: web::Form<FormData>,
    cms_client: web::Data<CmsClient>,
) -> Result<HttpResponse, SignupError> {
    let email = SignupEmail::parse_field(form.0.email)?;

    let outcome = register_signup(cms_client.get_ref(), &email).await;

    Ok(HttpResponse::Ok().json(SignupResponse::from(outcome)))
}

/// Forwards a validated email to the CMS and classifies the answer.
/// Never fails: every outcome comes back as a value.
#[tracing::instrument(name = "Registering a signup with the CMS", skip(cms_client))]
pub async fn register_signup(cms_client: &CmsClient, email: &SignupEmail) -> SignupOutcome {
    tracing::info!(signup_email = %email, "Received signup.");

    let payload = SignupPayload::new(email);

    match cms_client
        .mutate_data(Method::POST, SIGNUPS_PATH, &payload)
        .await
    {
        MutationOutcome::TransportFailure => SignupOutcome::TransportFailure,
        MutationOutcome::Response {
            error: Some(strapi_errors),
            ..
        } => SignupOutcome::Rejected { strapi_errors },
        MutationOutcome::Response { error: None, data } => SignupOutcome::Registered { data },
    }
}
