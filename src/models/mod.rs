mod auth_system;
mod cleanup_request;
mod credentials;
mod resource;
mod selection;

pub use auth_system::*;
pub use cleanup_request::*;
pub use credentials::*;
pub use resource::*;
pub use selection::*;
