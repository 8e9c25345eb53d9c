use reqwest::StatusCode;
use serde::Deserialize;

use crate::nova::Nova;

#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Compute API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Compute endpoint cannot be used as a base URL: {0}")]
    InvalidEndpoint(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct KeypairSummary {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServerSummary {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageSummary {
    pub id: String,
    pub name: String,
}

pub trait ComputeListKeypairs {
    fn list_keypairs(&self) -> impl Future<Output = Result<Vec<KeypairSummary>, ComputeError>>;
}

impl ComputeListKeypairs for Nova {
    async fn list_keypairs(&self) -> Result<Vec<KeypairSummary>, ComputeError> {
        self.list_keypairs().await
    }
}

pub trait ComputeListServers {
    fn list_servers(&self) -> impl Future<Output = Result<Vec<ServerSummary>, ComputeError>>;
}

impl ComputeListServers for Nova {
    async fn list_servers(&self) -> Result<Vec<ServerSummary>, ComputeError> {
        self.list_servers().await
    }
}

pub trait ComputeListImages {
    fn list_images(&self) -> impl Future<Output = Result<Vec<ImageSummary>, ComputeError>>;
}

impl ComputeListImages for Nova {
    async fn list_images(&self) -> Result<Vec<ImageSummary>, ComputeError> {
        self.list_images().await
    }
}

pub trait ComputeDeleteKeypair {
    fn delete_keypair(&self, name: &str) -> impl Future<Output = Result<(), ComputeError>>;
}

impl ComputeDeleteKeypair for Nova {
    async fn delete_keypair(&self, name: &str) -> Result<(), ComputeError> {
        self.delete(&["os-keypairs", name]).await
    }
}

pub trait ComputeDeleteServer {
    fn delete_server(&self, server_id: &str) -> impl Future<Output = Result<(), ComputeError>>;
}

impl ComputeDeleteServer for Nova {
    async fn delete_server(&self, server_id: &str) -> Result<(), ComputeError> {
        self.delete(&["servers", server_id]).await
    }
}

pub trait ComputeDeleteImage {
    fn delete_image(&self, image_id: &str) -> impl Future<Output = Result<(), ComputeError>>;
}

impl ComputeDeleteImage for Nova {
    async fn delete_image(&self, image_id: &str) -> Result<(), ComputeError> {
        self.delete(&["images", image_id]).await
    }
}
