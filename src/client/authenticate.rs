use tracing::info;

use crate::{
    client::Client,
    models::{AuthSystem, Credentials, ParseAuthSystemError},
    nova::{IdentityError, Nova, request_session},
};

#[derive(Debug, thiserror::Error)]
pub enum AuthenticateError {
    #[error(transparent)]
    UnknownAuthSystem(#[from] ParseAuthSystemError),
    #[error("Failed to authenticate: {0}")]
    Identity(#[from] IdentityError),
}

impl Client<Nova> {
    /// Authenticates against the identity service and connects to the compute endpoint of
    /// the configured region.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Complete credentials, see [`Credentials::resolve`]
    pub async fn authenticate(credentials: &Credentials) -> Result<Self, AuthenticateError> {
        let auth_system: AuthSystem = credentials.auth_system.parse()?;

        let http = reqwest::Client::new();
        let session = request_session(&http, credentials, auth_system).await?;
        info!(
            endpoint = %session.endpoint,
            region = %credentials.region_name,
            "authenticated"
        );

        Ok(Client::new(Nova::new(http, session)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    fn credentials(auth_url: String, auth_system: &str) -> Credentials {
        Credentials {
            username: "jenkins".to_string(),
            password: "s3cret".to_string(),
            tenant: "123456".to_string(),
            auth_url,
            auth_system: auth_system.to_string(),
            region_name: "IAD".to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/v2.0/tokens")).respond_with(
                json_encoded(json!({
                    "access": {
                        "token": {"id": "test-token"},
                        "serviceCatalog": [{
                            "type": "compute",
                            "endpoints": [{"region": "IAD", "publicURL": "https://iad.servers.example.com/v2/123456"}]
                        }]
                    }
                })),
            ),
        );

        let client = Client::authenticate(&credentials(
            server.url("/v2.0/").to_string(),
            "rackspace",
        ))
        .await
        .unwrap();

        assert_eq!(
            client.compute().endpoint().as_str(),
            "https://iad.servers.example.com/v2/123456"
        );
    }

    #[tokio::test]
    async fn test_authenticate_unknown_auth_system() {
        // Nothing listens on this URL; the auth system is rejected before any request.
        let result = Client::authenticate(&credentials(
            "http://127.0.0.1:9/v2.0/".to_string(),
            "kerberos",
        ))
        .await;

        assert!(matches!(
            result,
            Err(AuthenticateError::UnknownAuthSystem(_))
        ));
    }

    #[tokio::test]
    async fn test_authenticate_identity_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/v2.0/tokens"))
                .respond_with(status_code(401)),
        );

        let result = Client::authenticate(&credentials(
            server.url("/v2.0/").to_string(),
            "keystone",
        ))
        .await;

        assert!(matches!(
            result,
            Err(AuthenticateError::Identity(IdentityError::Rejected { .. }))
        ));
    }
}
