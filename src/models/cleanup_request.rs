use crate::models::{ResourceKind, Selection};

/// What a single cleanup run should look at, and whether it may delete.
///
/// Every kind is skipped and nothing is deleted unless explicitly enabled.
///
/// # Examples
///
/// ```
/// use cirax::models::{CleanupRequest, Selection};
///
/// let request = CleanupRequest::builder()
///     .selection(Selection::prefix("ci-"))
///     .servers(true)
///     .build();
///
/// assert!(!request.remove);
/// assert!(!request.keypairs);
/// ```
#[derive(Debug, Clone, PartialEq, typed_builder::TypedBuilder)]
#[builder(doc)]
pub struct CleanupRequest {
    /// Which resource names are cleanup candidates.
    pub selection: Selection,

    #[builder(default = false)]
    pub keypairs: bool,

    #[builder(default = false)]
    pub servers: bool,

    #[builder(default = false)]
    pub images: bool,

    /// Delete the candidates instead of only listing them.
    #[builder(default = false)]
    pub remove: bool,
}

impl CleanupRequest {
    /// Whether resources of `kind` are listed at all.
    pub fn includes(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Keypair => self.keypairs,
            ResourceKind::Server => self.servers,
            ResourceKind::Image => self.images,
        }
    }
}

/// Fixed cleanup configurations covering every resource kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Names starting with `J`.
    Jenkins,
    /// Names starting with `devstack-xenserver`.
    Nodepool,
}

impl Preset {
    pub fn selection(self) -> Selection {
        match self {
            Preset::Jenkins => Selection::jenkins(),
            Preset::Nodepool => Selection::nodepool(),
        }
    }

    pub fn request(self, remove: bool) -> CleanupRequest {
        CleanupRequest::builder()
            .selection(self.selection())
            .keypairs(true)
            .servers(true)
            .images(true)
            .remove(remove)
            .build()
    }
}
