use crate::{
    client::Client,
    compute::{ComputeError, ComputeListImages, ComputeListKeypairs, ComputeListServers},
    models::{Resource, ResourceKind},
};

#[derive(Debug, thiserror::Error)]
#[error("Failed to list {kind}s: {source}")]
pub struct ListResourcesError {
    pub kind: ResourceKind,
    #[source]
    pub source: ComputeError,
}

impl ListResourcesError {
    pub(crate) fn new(kind: ResourceKind, source: ComputeError) -> Self {
        ListResourcesError { kind, source }
    }
}

impl<C: ComputeListKeypairs + ComputeListServers + ComputeListImages> Client<C> {
    /// Lists every resource of `kind`, in the order the compute API returns them.
    pub async fn list_resources(
        &self,
        kind: ResourceKind,
    ) -> Result<Vec<Resource>, ListResourcesError> {
        match kind {
            ResourceKind::Keypair => self.list_keypairs().await,
            ResourceKind::Server => self.list_servers().await,
            ResourceKind::Image => self.list_images().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockCompute, image, keypair, server};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_list_resources_dispatches_on_kind() {
        // Arrange
        let mut mock_compute = MockCompute::new();

        mock_compute
            .expect_list_keypairs()
            .times(1)
            .returning(|| Ok(vec![keypair("ci-key")]));
        mock_compute
            .expect_list_servers()
            .times(1)
            .returning(|| Ok(vec![server("s1", "ci-server")]));
        mock_compute
            .expect_list_images()
            .times(1)
            .returning(|| Ok(vec![image("i1", "ci-image")]));

        let client = Client::new(mock_compute);

        // Act
        let mut names = Vec::new();
        for kind in ResourceKind::ALL {
            let resources = client.list_resources(kind).await.unwrap();
            assert!(resources.iter().all(|r| r.kind == kind));
            names.extend(resources.into_iter().map(|r| r.name));
        }

        // Assert
        assert_eq!(names, vec!["ci-key", "ci-server", "ci-image"]);
    }

    #[test]
    fn test_list_resources_error_message() {
        let err = ListResourcesError::new(ResourceKind::Image, crate::test_utils::server_error());

        assert_eq!(
            err.to_string(),
            "Failed to list images: Compute API returned 500 Internal Server Error: Internal Server Error"
        );
    }
}
