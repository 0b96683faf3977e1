//! Credential presence checks performed by the generated auth middleware.
//!
//! Only presence is checked. Whether a session id or token is genuine is up
//! to the application wiring the adapter.

use crate::domain::policy::platform::AuthScheme;

/// Cookie carrying the web session id.
pub const SESSION_COOKIE: &str = "session";
/// Prefix of a bearer `Authorization` header, trailing space included.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Status and body of a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRejection {
    pub status: u16,
    pub code: &'static str,
    pub message: &'static str,
}

impl AuthRejection {
    pub const UNAUTHORIZED: Self = Self {
        status: 401,
        code: "UNAUTHORIZED",
        message: "Authentication required",
    };
}

impl AuthScheme {
    /// Where the scheme's credential travels, for generated doc comments.
    pub fn credential_source(&self) -> String {
        match self {
            Self::Session => format!("the `{SESSION_COOKIE}` cookie"),
            Self::Bearer => format!("`Authorization: {BEARER_PREFIX}<token>`"),
        }
    }
}
