use std::{collections::HashMap, fmt};

pub const ENV_VAR_OS_USERNAME: &str = "OS_USERNAME";
pub const ENV_VAR_OS_PASSWORD: &str = "OS_PASSWORD";
pub const ENV_VAR_OS_TENANT_NAME: &str = "OS_TENANT_NAME";
pub const ENV_VAR_OS_AUTH_URL: &str = "OS_AUTH_URL";
pub const ENV_VAR_OS_AUTH_SYSTEM: &str = "OS_AUTH_SYSTEM";
pub const ENV_VAR_OS_REGION_NAME: &str = "OS_REGION_NAME";

/// Every variable needed to authenticate, in the order they are reported when missing.
pub const REQUIRED_ENVIRONMENT_VARIABLES: [&str; 6] = [
    ENV_VAR_OS_USERNAME,
    ENV_VAR_OS_PASSWORD,
    ENV_VAR_OS_TENANT_NAME,
    ENV_VAR_OS_AUTH_URL,
    ENV_VAR_OS_AUTH_SYSTEM,
    ENV_VAR_OS_REGION_NAME,
];

/// Credentials used to authenticate against the identity service.
///
/// Built by [`Credentials::resolve`], which refuses incomplete environments so a partial
/// record never reaches authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub tenant: String,
    pub auth_url: String,
    pub auth_system: String,
    pub region_name: String,
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("Missing environment variables: {}", .0.join(", "))]
pub struct MissingEnvironmentVariablesError(pub Vec<&'static str>);

impl MissingEnvironmentVariablesError {
    /// The missing variable names, in declaration order.
    pub fn variables(&self) -> &[&'static str] {
        &self.0
    }
}

/// Returns every required variable absent from `env`.
///
/// The result follows the order of [`REQUIRED_ENVIRONMENT_VARIABLES`]. A variable set to
/// the empty string is present.
pub fn missing_variables(env: &HashMap<String, String>) -> Vec<&'static str> {
    REQUIRED_ENVIRONMENT_VARIABLES
        .into_iter()
        .filter(|name| !env.contains_key(*name))
        .collect()
}

impl Credentials {
    /// Builds credentials from an environment map.
    ///
    /// Values are copied verbatim. If any required variable is absent, the error lists
    /// all of them and no credentials are produced.
    pub fn resolve(
        env: &HashMap<String, String>,
    ) -> Result<Credentials, MissingEnvironmentVariablesError> {
        let missing = missing_variables(env);
        if !missing.is_empty() {
            return Err(MissingEnvironmentVariablesError(missing));
        }

        let get = |name: &str| env.get(name).cloned().unwrap_or_default();

        Ok(Credentials {
            username: get(ENV_VAR_OS_USERNAME),
            password: get(ENV_VAR_OS_PASSWORD),
            tenant: get(ENV_VAR_OS_TENANT_NAME),
            auth_url: get(ENV_VAR_OS_AUTH_URL),
            auth_system: get(ENV_VAR_OS_AUTH_SYSTEM),
            region_name: get(ENV_VAR_OS_REGION_NAME),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("tenant", &self.tenant)
            .field("auth_url", &self.auth_url)
            .field("auth_system", &self.auth_system)
            .field("region_name", &self.region_name)
            .finish()
    }
}
