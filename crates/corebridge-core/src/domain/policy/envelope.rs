//! Offline envelope rules.
//!
//! Offline-wrapped platforms add an `_offline` block to every successful
//! payload and touch nothing else. Cacheability and TTL come from a fixed
//! table keyed by operation kind; the generated `extensions/offline.ts`
//! carries one row per route entry:
//!
//! | Operation | Cacheable | TTL (s) | Queueable offline |
//! |-----------|-----------|---------|-------------------|
//! | get       | yes       | 3600    | no                |
//! | list      | yes       | 300     | no                |
//! | create    | no        | -       | yes               |

use crate::domain::routes::OperationKind;

/// Key under which offline metadata is attached.
///
/// Reserved: a payload field with this name is replaced when wrapping.
pub const OFFLINE_KEY: &str = "_offline";

/// Cache lifetime of an operation in seconds, `None` when it must not be
/// cached.
pub const fn cache_ttl(kind: OperationKind) -> Option<u64> {
    match kind {
        OperationKind::Get => Some(3600),
        OperationKind::List => Some(300),
        OperationKind::Create => None,
    }
}

/// Whether a client may queue the operation while offline and replay it.
pub const fn can_queue_offline(kind: OperationKind) -> bool {
    kind.is_write()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_table() {
        assert_eq!(cache_ttl(OperationKind::Get), Some(3600));
        assert_eq!(cache_ttl(OperationKind::List), Some(300));
        assert_eq!(cache_ttl(OperationKind::Create), None);
    }

    #[test]
    fn only_uncacheable_operations_queue() {
        for kind in OperationKind::ALL {
            assert_eq!(can_queue_offline(kind), cache_ttl(kind).is_none(), "{kind}");
        }
    }
}
