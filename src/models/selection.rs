const JENKINS_PREFIX: &str = "J";
const NODEPOOL_PREFIX: &str = "devstack-xenserver";

/// Decides which resources belong to the cleanup set.
///
/// Matching is a literal, case-sensitive prefix comparison. Characters such as `*` or
/// `?` have no special meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    prefix: String,
}

impl Selection {
    pub fn prefix(prefix: impl Into<String>) -> Selection {
        Selection {
            prefix: prefix.into(),
        }
    }

    /// Resources created by Jenkins jobs.
    pub fn jenkins() -> Selection {
        Selection::prefix(JENKINS_PREFIX)
    }

    /// Resources created by nodepool for XenServer devstack runs.
    pub fn nodepool() -> Selection {
        Selection::prefix(NODEPOOL_PREFIX)
    }

    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }

    pub fn as_prefix(&self) -> &str {
        &self.prefix
    }
}
