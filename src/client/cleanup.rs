use tracing::{error, info};

use crate::{
    client::{Client, DeleteResourceError, ListResourcesError},
    compute::{
        ComputeDeleteImage, ComputeDeleteKeypair, ComputeDeleteServer, ComputeListImages,
        ComputeListKeypairs, ComputeListServers,
    },
    models::{CleanupRequest, Resource, ResourceKind},
};

#[derive(Debug, thiserror::Error)]
pub enum CleanupError {
    #[error(transparent)]
    ListResources(#[from] ListResourcesError),
}

/// A candidate that could not be deleted.
#[derive(Debug)]
pub struct DeleteFailure {
    pub resource: Resource,
    pub error: DeleteResourceError,
}

/// The outcome of a cleanup run.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Matching resources: keypairs, then servers, then images, each in listing order.
    pub candidates: Vec<Resource>,
    /// Deletions that failed. Always empty when the request did not ask for removal.
    pub failures: Vec<DeleteFailure>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<C> Client<C>
where
    C: ComputeListKeypairs
        + ComputeListServers
        + ComputeListImages
        + ComputeDeleteKeypair
        + ComputeDeleteServer
        + ComputeDeleteImage,
{
    /// Finds the resources selected by `request` and deletes them if it asks for removal.
    ///
    /// Kinds the request does not include are never listed. A listing failure aborts the
    /// run. A deletion failure is logged and recorded in the report, and the remaining
    /// candidates are still deleted.
    pub async fn cleanup(&self, request: &CleanupRequest) -> Result<CleanupReport, CleanupError> {
        let mut report = CleanupReport::default();

        for kind in ResourceKind::ALL {
            if !request.includes(kind) {
                continue;
            }

            for resource in self.list_resources(kind).await? {
                if request.selection.matches(&resource.name) {
                    info!("found {}: {}", resource.kind, resource.name);
                    report.candidates.push(resource);
                }
            }
        }

        if !request.remove {
            return Ok(report);
        }

        for resource in &report.candidates {
            info!("deleting {}", resource.name);

            if let Err(err) = self.delete_resource(resource).await {
                error!("{err}");
                report.failures.push(DeleteFailure {
                    resource: resource.clone(),
                    error: err,
                });
            }
        }

        if !report.is_clean() {
            error!(
                "{} of {} deletions failed",
                report.failures.len(),
                report.candidates.len()
            );
        }

        Ok(report)
    }
}
