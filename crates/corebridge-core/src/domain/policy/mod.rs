//! Per-platform policies: pagination, authentication, response envelope and
//! extension modules.

pub mod auth;
pub mod envelope;
pub mod pagination;
pub mod platform;

pub use auth::AuthRejection;
pub use envelope::{OFFLINE_KEY, can_queue_offline, cache_ttl};
pub use platform::{
    AuthScheme, EnvelopeStyle, Extension, PLATFORM_REGISTRY, PaginationStyle, Platform,
    PlatformProfile, resolve,
};
