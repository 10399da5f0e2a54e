use std::time::Duration;

use serde_json::{Value, json};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, body_json, method, path},
};

use crate::helpers::spawn_app;

const VALID_BODY: &str = "email=a%40b.com";

#[tokio::test]
async fn signup_forwards_exactly_one_call_with_the_wrapped_email() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/api/signups"))
        .and(body_json(json!({ "data": { "email": "a@b.com" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 42 })))
        .expect(1)
        .mount(&app.cms_server)
        .await;

    let response = app.post_signup(VALID_BODY.into()).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn signup_reports_success_with_the_cms_response() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 42 })))
        .mount(&app.cms_server)
        .await;

    let response = app.post_signup(VALID_BODY.into()).await;
    let body: Value = response.json().await.expect("Response was not JSON.");

    assert_eq!(
        body,
        json!({
            "message": "Form submitted, thank you.",
            "data": { "id": 42 },
            "strapiErrors": null
        })
    );
}

#[tokio::test]
async fn signup_reports_cms_errors() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "duplicate" })))
        .mount(&app.cms_server)
        .await;

    let response = app.post_signup(VALID_BODY.into()).await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Response was not JSON.");
    assert_eq!(
        body,
        json!({ "strapiErrors": "duplicate", "message": "Failed to Register." })
    );
}

#[tokio::test]
async fn signup_surfaces_structured_cms_errors_from_a_4xx() {
    let app = spawn_app().await;
    let error = json!({
        "status": 400,
        "name": "ValidationError",
        "message": "This attribute must be unique",
        "details": {}
    });

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "data": null, "error": error })),
        )
        .mount(&app.cms_server)
        .await;

    let response = app.post_signup(VALID_BODY.into()).await;
    let body: Value = response.json().await.expect("Response was not JSON.");

    assert_eq!(
        body,
        json!({ "strapiErrors": error, "message": "Failed to Register." })
    );
}

#[tokio::test]
async fn signup_reports_a_retry_message_when_the_cms_returns_nothing() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
        .mount(&app.cms_server)
        .await;

    let response = app.post_signup(VALID_BODY.into()).await;
    let body: Value = response.json().await.expect("Response was not JSON.");

    assert_eq!(
        body,
        json!({
            "strapiErrors": null,
            "message": "Ops! Something went wrong. Please try again."
        })
    );
}

#[tokio::test]
async fn signup_reports_a_retry_message_when_the_cms_is_too_slow() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 42 }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&app.cms_server)
        .await;

    let response = app.post_signup(VALID_BODY.into()).await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Response was not JSON.");
    assert_eq!(
        body["message"],
        json!("Ops! Something went wrong. Please try again.")
    );
    assert_eq!(body["strapiErrors"], Value::Null);
}

#[tokio::test]
async fn signup_returns_400_and_skips_the_cms_for_invalid_emails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.cms_server)
        .await;

    let test_cases = vec![
        ("email=", "This field has to be filled.", "empty email"),
        ("email=%20%20", "This is not a valid email.", "blank email"),
        ("", "This field has to be filled.", "missing email"),
        (
            "email=not-an-email",
            "This is not a valid email.",
            "malformed email",
        ),
        (
            "email=%40domain.com",
            "This is not a valid email.",
            "email without a local part",
        ),
    ];

    for (body, message, description) in test_cases {
        let response = app.post_signup(body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );

        let body: Value = response.json().await.expect("Response was not JSON.");
        assert_eq!(
            body,
            json!({ "message": message, "fields": { "email": [message] } }),
            "Unexpected validation body for {}.",
            description
        );
    }
}
