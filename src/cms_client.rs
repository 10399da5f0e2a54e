use std::time::Duration;

use reqwest::{Client, Method, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct CmsClient {
    http_client: Client,
    base_url: Url,
    api_token: Option<SecretString>,
}

/// What came back from a mutation call.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// Nothing usable arrived: network error, timeout, unparsable or falsy body.
    TransportFailure,
    /// The CMS answered. `error` is only set when the body flags a truthy `error`.
    Response { error: Option<Value>, data: Value },
}

impl MutationOutcome {
    pub fn from_body(body: Value) -> Self {
        if !is_truthy(&body) {
            return MutationOutcome::TransportFailure;
        }

        let error = body.get("error").filter(|e| is_truthy(e)).cloned();
        MutationOutcome::Response { error, data: body }
    }
}

/// Truthiness of a JSON value as the CMS frontend understands it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl CmsClient {
    pub fn new(
        base_url: &str,
        api_token: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self {
            http_client: Client::builder().timeout(timeout).build()?,
            base_url: Url::parse(base_url)?,
            api_token,
        })
    }

    #[tracing::instrument(name = "Calling the CMS API", skip(self, payload))]
    pub async fn mutate_data<P>(&self, method: Method, path: &str, payload: &P) -> MutationOutcome
    where
        P: Serialize + ?Sized,
    {
        match self.send(method, path, payload).await {
            Ok(body) => MutationOutcome::from_body(body),
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "The CMS API could not be reached."
                );
                MutationOutcome::TransportFailure
            }
        }
    }

    async fn send<P>(&self, method: Method, path: &str, payload: &P) -> Result<Value, anyhow::Error>
    where
        P: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;

        let mut request = self.http_client.request(method, url).json(payload);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let body = request.send().await?.json::<Value>().await?;
        Ok(body)
    }
}
