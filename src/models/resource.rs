use std::fmt;

use crate::compute::{ImageSummary, KeypairSummary, ServerSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Keypair,
    Server,
    Image,
}

impl ResourceKind {
    /// All kinds, in the order a cleanup run visits them.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Keypair,
        ResourceKind::Server,
        ResourceKind::Image,
    ];
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Keypair => write!(f, "keypair"),
            ResourceKind::Server => write!(f, "server"),
            ResourceKind::Image => write!(f, "image"),
        }
    }
}

/// A named object on the compute cloud.
///
/// Keypairs have no separate identifier, so their `id` is their name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    pub kind: ResourceKind,
    pub id: String,
    pub name: String,
}

impl From<KeypairSummary> for Resource {
    fn from(value: KeypairSummary) -> Self {
        Resource {
            kind: ResourceKind::Keypair,
            id: value.name.clone(),
            name: value.name,
        }
    }
}

impl From<ServerSummary> for Resource {
    fn from(value: ServerSummary) -> Self {
        Resource {
            kind: ResourceKind::Server,
            id: value.id,
            name: value.name,
        }
    }
}

impl From<ImageSummary> for Resource {
    fn from(value: ImageSummary) -> Self {
        Resource {
            kind: ResourceKind::Image,
            id: value.id,
            name: value.name,
        }
    }
}
