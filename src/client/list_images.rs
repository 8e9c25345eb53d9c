use crate::{
    client::{Client, ListResourcesError},
    compute::ComputeListImages,
    models::{Resource, ResourceKind},
};

impl<C: ComputeListImages> Client<C> {
    /// Lists every image the authenticated tenant can see, including public base images.
    pub async fn list_images(&self) -> Result<Vec<Resource>, ListResourcesError> {
        let summaries = self
            .compute
            .list_images()
            .await
            .map_err(|e| ListResourcesError::new(ResourceKind::Image, e))?;

        Ok(summaries.into_iter().map(Resource::from).collect())
    }
}
