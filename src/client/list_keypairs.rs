use crate::{
    client::{Client, ListResourcesError},
    compute::ComputeListKeypairs,
    models::{Resource, ResourceKind},
};

impl<C: ComputeListKeypairs> Client<C> {
    /// Lists every keypair visible to the authenticated tenant.
    pub async fn list_keypairs(&self) -> Result<Vec<Resource>, ListResourcesError> {
        let summaries = self
            .compute
            .list_keypairs()
            .await
            .map_err(|e| ListResourcesError::new(ResourceKind::Keypair, e))?;

        Ok(summaries.into_iter().map(Resource::from).collect())
    }
}
