use std::str::FromStr;

/// The credential flavour sent to the identity service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthSystem {
    /// Plain Keystone v2 username/password scoped to a tenant.
    Keystone,
    /// Rackspace identity, where the password is an API key.
    Rackspace,
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown auth system: {0}")]
pub struct ParseAuthSystemError(String);

impl FromStr for AuthSystem {
    type Err = ParseAuthSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keystone" => Ok(AuthSystem::Keystone),
            "rackspace" | "rackspace_uk" => Ok(AuthSystem::Rackspace),
            _ => Err(ParseAuthSystemError(s.to_string())),
        }
    }
}
