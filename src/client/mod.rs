use crate::nova::Nova;

mod authenticate;
mod cleanup;
mod delete_resource;
mod list_images;
mod list_keypairs;
mod list_resources;
mod list_servers;

pub use authenticate::AuthenticateError;
pub use cleanup::{CleanupError, CleanupReport, DeleteFailure};
pub use delete_resource::DeleteResourceError;
pub use list_resources::ListResourcesError;

/// The main entry point for inspecting and cleaning up compute resources.
///
/// `Client` wraps a compute backend and provides the list, delete and cleanup operations.
/// The backend is generic so the operations can be exercised against mocks; in
/// production it is an authenticated [`Nova`] connection obtained through
/// [`Client::authenticate`].
pub struct Client<C = Nova> {
    compute: C,
}

impl<C> Client<C> {
    /// Creates a client around an already connected compute backend.
    ///
    /// # Arguments
    ///
    /// * `compute` - A compute backend implementing the `compute` traits
    pub fn new(compute: C) -> Client<C> {
        Client { compute }
    }

    pub fn compute(&self) -> &C {
        &self.compute
    }
}
