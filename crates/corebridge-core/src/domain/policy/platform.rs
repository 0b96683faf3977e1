//! Platform profile registry.
//!
//! Each built-in platform is described exactly once by a row in
//! [`PLATFORM_REGISTRY`]. Generators never branch on an adapter id string;
//! they branch on the policies of the resolved [`PlatformProfile`].
//!
//! # Adding a platform
//!
//! 1. Add a variant to [`Platform`] and its `as_str` arm
//! 2. Add one [`PlatformProfile`] row to [`PLATFORM_REGISTRY`]
//!
//! # Unknown adapter ids
//!
//! [`resolve`] is total. Any id that is not in the registry resolves to the
//! [`DEFAULT_PLATFORM`] (web) profile. The adapter package is still named
//! after the requested id; only its behaviour is web's.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in target platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Mobile,
}

impl Platform {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How list endpoints page through a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationStyle {
    /// `{ data, pagination: { hasMore, nextCursor } }`
    Cursor,
    /// `{ data, pagination: { total, offset, limit, hasMore } }`
    Offset,
}

/// Which credential the auth middleware demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// Session id from the `session` cookie.
    Session,
    /// `Authorization: Bearer <token>` header.
    Bearer,
}

/// Wrapper applied around successful payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnvelopeStyle {
    Plain,
    /// Adds an `_offline` block to every successful payload.
    OfflineWrapped,
}

/// Optional capability modules emitted under `src/extensions/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    Pagination,
    Offline,
}

impl Extension {
    /// Module file stem, e.g. `offline` for `src/extensions/offline.ts`.
    pub const fn module_name(&self) -> &'static str {
        match self {
            Self::Pagination => "pagination",
            Self::Offline => "offline",
        }
    }
}

/// The full policy set of one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformProfile {
    pub platform: Platform,
    /// Canonical id of the platform, not the id the user asked for.
    pub adapter_id: &'static str,
    pub pagination: PaginationStyle,
    pub auth: AuthScheme,
    pub envelope: EnvelopeStyle,
    pub extensions: &'static [Extension],
}

impl PlatformProfile {
    pub fn has_extension(&self, extension: Extension) -> bool {
        self.extensions.contains(&extension)
    }
}

/// Platform used for any adapter id not found in the registry.
pub const DEFAULT_PLATFORM: Platform = Platform::Web;

/// Single source of truth for platform behaviour.
pub static PLATFORM_REGISTRY: &[PlatformProfile] = &[
    PlatformProfile {
        platform: Platform::Web,
        adapter_id: "web",
        pagination: PaginationStyle::Cursor,
        auth: AuthScheme::Session,
        envelope: EnvelopeStyle::Plain,
        extensions: &[Extension::Pagination],
    },
    PlatformProfile {
        platform: Platform::Mobile,
        adapter_id: "mobile",
        pagination: PaginationStyle::Offset,
        auth: AuthScheme::Bearer,
        envelope: EnvelopeStyle::OfflineWrapped,
        extensions: &[Extension::Pagination, Extension::Offline],
    },
];

/// Look up the registry row for a platform.
pub fn profile_of(platform: Platform) -> PlatformProfile {
    PLATFORM_REGISTRY
        .iter()
        .copied()
        .find(|p| p.platform == platform)
        .unwrap_or(PLATFORM_REGISTRY[0])
}

/// Whether `adapter_id` names a built-in platform (case-sensitive).
pub fn is_builtin(adapter_id: &str) -> bool {
    PLATFORM_REGISTRY.iter().any(|p| p.adapter_id == adapter_id)
}

/// Resolve an adapter id to its profile, falling back to web.
pub fn resolve(adapter_id: &str) -> PlatformProfile {
    PLATFORM_REGISTRY
        .iter()
        .copied()
        .find(|p| p.adapter_id == adapter_id)
        .unwrap_or_else(|| profile_of(DEFAULT_PLATFORM))
}

/// Debug-time check that every [`Platform`] has exactly one registry row.
pub fn assert_registry_integrity() {
    for platform in [Platform::Web, Platform::Mobile] {
        let rows = PLATFORM_REGISTRY
            .iter()
            .filter(|p| p.platform == platform)
            .count();
        assert_eq!(rows, 1, "platform {platform} must have exactly one registry row");

        let row = profile_of(platform);
        assert_eq!(row.adapter_id, platform.as_str());
        assert!(
            row.has_extension(Extension::Pagination),
            "every platform ships a pagination module"
        );
        if row.envelope == EnvelopeStyle::OfflineWrapped {
            assert!(
                row.has_extension(Extension::Offline),
                "offline-wrapped responses import the offline module"
            );
        }
    }
    assert_eq!(PLATFORM_REGISTRY[0].platform, DEFAULT_PLATFORM);
}
