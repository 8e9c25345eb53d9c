use crate::{
    client::Client,
    compute::{ComputeDeleteImage, ComputeDeleteKeypair, ComputeDeleteServer, ComputeError},
    models::{Resource, ResourceKind},
};

#[derive(Debug, thiserror::Error)]
#[error("Failed to delete {kind} {name}: {source}")]
pub struct DeleteResourceError {
    pub kind: ResourceKind,
    pub name: String,
    #[source]
    pub source: ComputeError,
}

impl<C: ComputeDeleteKeypair + ComputeDeleteServer + ComputeDeleteImage> Client<C> {
    /// Deletes a resource previously returned by one of the list operations.
    ///
    /// Keypairs are deleted by name, servers and images by id.
    pub async fn delete_resource(&self, resource: &Resource) -> Result<(), DeleteResourceError> {
        let result = match resource.kind {
            ResourceKind::Keypair => self.compute.delete_keypair(&resource.id).await,
            ResourceKind::Server => self.compute.delete_server(&resource.id).await,
            ResourceKind::Image => self.compute.delete_image(&resource.id).await,
        };

        result.map_err(|source| DeleteResourceError {
            kind: resource.kind,
            name: resource.name.clone(),
            source,
        })
    }
}
