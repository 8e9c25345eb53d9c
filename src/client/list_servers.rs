use crate::{
    client::{Client, ListResourcesError},
    compute::ComputeListServers,
    models::{Resource, ResourceKind},
};

impl<C: ComputeListServers> Client<C> {
    /// Lists every server visible to the authenticated tenant.
    pub async fn list_servers(&self) -> Result<Vec<Resource>, ListResourcesError> {
        let summaries = self
            .compute
            .list_servers()
            .await
            .map_err(|e| ListResourcesError::new(ResourceKind::Server, e))?;

        Ok(summaries.into_iter().map(Resource::from).collect())
    }
}
