//! Domain name derivation.
//!
//! Every generated artifact refers to a domain through one of a handful of
//! surface forms: `User` for types, `users` for route segments, `userId` for
//! path parameters. [`DomainDescriptor`] computes all of them once from the
//! configured token so that no generator re-derives a name on its own.
//!
//! Pluralisation is always "append `s`". There is no irregular-plural
//! handling: `person` becomes `persons`.
//!
//! Tokens are expected to match `^[a-z][a-z0-9]*$`. Nothing here enforces
//! that; a malformed token flows straight into malformed identifiers and
//! paths. [`DomainDescriptor::is_well_formed`] exists so callers can warn.

use std::fmt;

/// All surface forms of a single domain token.
///
/// A pure view over the token; two descriptors built from the same token are
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainDescriptor {
    token: String,
    capitalized: String,
    route_segment: String,
    path_param: String,
}

impl DomainDescriptor {
    /// Derive every surface form of `token`.
    pub fn derive(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            capitalized: capitalize(&token),
            route_segment: format!("{token}s"),
            path_param: format!("{token}Id"),
            token,
        }
    }

    /// The token as configured, e.g. `project`.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Capitalised singular, e.g. `Project`.
    pub fn capitalized(&self) -> &str {
        &self.capitalized
    }

    /// Collection route segment, e.g. `projects`.
    pub fn route_segment(&self) -> &str {
        &self.route_segment
    }

    /// Path parameter name for the item route, e.g. `projectId`.
    pub fn path_param(&self) -> &str {
        &self.path_param
    }

    /// Capitalised plural, e.g. `Projects`.
    pub fn plural_capitalized(&self) -> String {
        format!("{}s", self.capitalized)
    }

    /// Whether the token has the expected `^[a-z][a-z0-9]*$` shape.
    pub fn is_well_formed(&self) -> bool {
        let mut chars = self.token.chars();
        match chars.next() {
            Some(first) if first.is_ascii_lowercase() => {
                chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            }
            _ => false,
        }
    }
}

impl fmt::Display for DomainDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// Upper-case the first character and keep the rest untouched.
///
/// `capitalize("mobile")` is `"Mobile"`; the empty string stays empty.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
