// Internal types - never serialized to API clients directly
pub mod auth;
pub mod context;

pub use auth::Claims;
pub use context::{RequestContext, RequestId};
