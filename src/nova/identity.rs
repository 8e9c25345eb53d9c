use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::join_segments;
use crate::models::{AuthSystem, Credentials};

const COMPUTE_SERVICE_TYPE: &str = "compute";

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid auth URL {url}: {reason}")]
    InvalidAuthUrl { url: String, reason: String },
    #[error("Failed to request a token: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Identity service rejected the credentials ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("No compute endpoint found for region {0}")]
    EndpointNotFound(String),
    #[error("Invalid compute endpoint {0}")]
    InvalidEndpoint(String),
}

/// A token and the compute endpoint it is valid for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub endpoint: Url,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    auth: AuthBody<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum AuthBody<'a> {
    Password {
        #[serde(rename = "passwordCredentials")]
        password_credentials: PasswordCredentials<'a>,
        #[serde(rename = "tenantName")]
        tenant_name: &'a str,
    },
    ApiKey {
        #[serde(rename = "RAX-KSKEY:apiKeyCredentials")]
        api_key_credentials: ApiKeyCredentials<'a>,
    },
}

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiKeyCredentials<'a> {
    username: &'a str,
    api_key: &'a str,
    tenant_name: &'a str,
}

impl<'a> TokenRequest<'a> {
    fn new(credentials: &'a Credentials, auth_system: AuthSystem) -> Self {
        let auth = match auth_system {
            AuthSystem::Keystone => AuthBody::Password {
                password_credentials: PasswordCredentials {
                    username: &credentials.username,
                    password: &credentials.password,
                },
                tenant_name: &credentials.tenant,
            },
            AuthSystem::Rackspace => AuthBody::ApiKey {
                api_key_credentials: ApiKeyCredentials {
                    username: &credentials.username,
                    api_key: &credentials.password,
                    tenant_name: &credentials.tenant,
                },
            },
        };

        TokenRequest { auth }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access: Access,
}

#[derive(Deserialize)]
struct Access {
    token: Token,
    #[serde(rename = "serviceCatalog", default)]
    service_catalog: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct Token {
    id: String,
}

#[derive(Deserialize)]
struct CatalogEntry {
    #[serde(rename = "type")]
    service_type: String,
    #[serde(default)]
    endpoints: Vec<CatalogEndpoint>,
}

#[derive(Deserialize)]
struct CatalogEndpoint {
    region: Option<String>,
    #[serde(rename = "publicURL")]
    public_url: String,
}

impl Access {
    /// The public compute URL for `region`. Region names are compared exactly.
    fn compute_endpoint(&self, region: &str) -> Option<&str> {
        self.service_catalog
            .iter()
            .filter(|entry| entry.service_type == COMPUTE_SERVICE_TYPE)
            .flat_map(|entry| entry.endpoints.iter())
            .find(|endpoint| endpoint.region.as_deref() == Some(region))
            .map(|endpoint| endpoint.public_url.as_str())
    }
}

/// Exchanges credentials for a token using the Keystone v2 `tokens` API.
pub async fn request_session(
    http: &reqwest::Client,
    credentials: &Credentials,
    auth_system: AuthSystem,
) -> Result<Session, IdentityError> {
    let auth_url =
        Url::parse(&credentials.auth_url).map_err(|e| IdentityError::InvalidAuthUrl {
            url: credentials.auth_url.clone(),
            reason: e.to_string(),
        })?;
    let tokens_url =
        join_segments(&auth_url, &["tokens"]).ok_or_else(|| IdentityError::InvalidAuthUrl {
            url: credentials.auth_url.clone(),
            reason: "cannot be a base URL".to_string(),
        })?;

    debug!(url = %tokens_url, ?auth_system, "requesting token");

    let response = http
        .post(tokens_url)
        .json(&TokenRequest::new(credentials, auth_system))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(IdentityError::Rejected { status, body });
    }

    let TokenResponse { access } = response.json().await?;

    let endpoint = access
        .compute_endpoint(&credentials.region_name)
        .ok_or_else(|| IdentityError::EndpointNotFound(credentials.region_name.clone()))?;
    let endpoint = Url::parse(endpoint)
        .ok()
        .filter(|url| !url.cannot_be_a_base())
        .ok_or_else(|| IdentityError::InvalidEndpoint(endpoint.to_string()))?;

    Ok(Session {
        token: access.token.id,
        endpoint,
    })
}
