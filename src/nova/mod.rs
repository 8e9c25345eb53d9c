//! HTTP adapter for an OpenStack Nova compute endpoint.

use reqwest::Url;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::compute::{ComputeError, ImageSummary, KeypairSummary, ServerSummary};

mod identity;

pub use identity::{IdentityError, Session, request_session};

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// An authenticated connection to one region's compute endpoint.
pub struct Nova {
    http: reqwest::Client,
    endpoint: Url,
    token: String,
}

#[derive(Deserialize)]
struct KeypairsResponse {
    keypairs: Vec<KeypairEnvelope>,
}

#[derive(Deserialize)]
struct KeypairEnvelope {
    keypair: KeypairSummary,
}

#[derive(Deserialize)]
struct ServersResponse {
    servers: Vec<ServerSummary>,
}

#[derive(Deserialize)]
struct ImagesResponse {
    images: Vec<ImageSummary>,
}

impl Nova {
    pub fn new(http: reqwest::Client, session: Session) -> Nova {
        Nova {
            http,
            endpoint: session.endpoint,
            token: session.token,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn list_keypairs(&self) -> Result<Vec<KeypairSummary>, ComputeError> {
        let response: KeypairsResponse = self.get(&["os-keypairs"]).await?;
        Ok(response.keypairs.into_iter().map(|k| k.keypair).collect())
    }

    pub async fn list_servers(&self) -> Result<Vec<ServerSummary>, ComputeError> {
        let response: ServersResponse = self.get(&["servers"]).await?;
        Ok(response.servers)
    }

    pub async fn list_images(&self) -> Result<Vec<ImageSummary>, ComputeError> {
        let response: ImagesResponse = self.get(&["images"]).await?;
        Ok(response.images)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ComputeError> {
        let url = self.url(segments)?;
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .header(AUTH_TOKEN_HEADER, &self.token)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<(), ComputeError> {
        let url = self.url(segments)?;
        debug!(%url, "DELETE");

        let response = self
            .http
            .delete(url)
            .header(AUTH_TOKEN_HEADER, &self.token)
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ComputeError> {
        join_segments(&self.endpoint, segments)
            .ok_or_else(|| ComputeError::InvalidEndpoint(self.endpoint.to_string()))
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ComputeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ComputeError::Status { status, body })
}

/// Appends percent-encoded path segments to `base`, ignoring a trailing slash.
///
/// Returns `None` for URLs that cannot carry a path, such as `mailto:` URLs.
fn join_segments(base: &Url, segments: &[&str]) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .extend(segments);
    Some(url)
}
