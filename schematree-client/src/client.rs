//! Session-authenticated schema fetches.

use reqwest::{
    blocking::{Client, RequestBuilder, Response},
    header,
};
use schematree_model::SchemaPath;
use serde::{Deserialize, Serialize};

use crate::{ClientError, ControllerConfig};

/// Login endpoint, relative to the base URL.
const LOGIN_ENDPOINT: &str = "api/v1/auth/login";

/// Prefix of schema endpoints, relative to the base URL.
const SCHEMA_ENDPOINT: &str = "api/v1/schema";

/// Cookie carrying the session token.
const SESSION_COOKIE: &str = "session_cookie";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    user: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    success: Option<bool>,
    session_cookie: Option<String>,
    error_message: Option<String>,
}

/// A schema document as returned by the controller.
#[derive(Debug, Clone)]
pub struct FetchedSchema {
    /// URL the document was fetched from
    pub url: String,
    /// Response body, unparsed
    pub body: String,
}

/// Blocking client holding a logged-in controller session.
#[derive(Debug)]
pub struct ControllerClient {
    client: Client,
    base_url: String,
    session: String,
}

impl ControllerClient {
    /// Build an HTTP client for `config` and log in.
    pub fn connect(config: &ControllerConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure)
            .user_agent(concat!("schematree/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Build)?;

        let base_url = config.base_url();
        let session = login(&client, &base_url, &config.username, &config.password)?;
        tracing::debug!(base_url = %base_url, username = %config.username, "logged in to controller");

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    /// Fetch the schema rooted at `path`.
    pub fn schema(&self, path: &SchemaPath) -> Result<FetchedSchema, ClientError> {
        let url = format!("{}/{}/{}", self.base_url, SCHEMA_ENDPOINT, path);
        tracing::debug!(url = %url, "fetching schema");

        let request = self.client.get(&url).header(
            header::COOKIE,
            format!("{}={}", SESSION_COOKIE, self.session),
        );
        let response = send(request, &url)?;
        let body = response
            .text()
            .map_err(|source| ClientError::Deserialization {
                endpoint: url.clone(),
                source,
            })?;
        tracing::debug!(url = %url, bytes = body.len(), "fetched schema");

        Ok(FetchedSchema { url, body })
    }
}

fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<String, ClientError> {
    let url = format!("{}/{}", base_url, LOGIN_ENDPOINT);
    tracing::debug!(url = %url, username, "logging in");

    let request = client.post(&url).json(&LoginRequest {
        user: username,
        password,
    });
    let login_failed = |reason: String| ClientError::Login {
        username: username.to_string(),
        reason,
    };

    let response = match send(request, &url) {
        Err(ClientError::Api { status, body, .. }) => {
            return Err(login_failed(format!("controller returned {}: {}", status, body)));
        }
        other => other?,
    };
    let login: LoginResponse = response
        .json()
        .map_err(|source| ClientError::Deserialization {
            endpoint: url.clone(),
            source,
        })?;

    if login.success == Some(false) {
        return Err(login_failed(
            login
                .error_message
                .unwrap_or_else(|| "credentials rejected".to_string()),
        ));
    }
    login
        .session_cookie
        .ok_or_else(|| login_failed("response carried no session cookie".to_string()))
}

/// Send a request, turning transport failures and non-2xx statuses into errors.
fn send(request: RequestBuilder, endpoint: &str) -> Result<Response, ClientError> {
    let response = request.send().map_err(|source| ClientError::Http {
        endpoint: endpoint.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(ClientError::Api {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}
