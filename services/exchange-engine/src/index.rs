//! Per-invocation inventory cross-index
//!
//! Groups a flat item snapshot by (user, set) in one linear pass so the
//! matching loops get O(1) inventory lookups. Built fresh per request and
//! discarded with it; holds borrows only, copies nothing.

use std::collections::HashMap;

use types::ids::{SetId, UserId};
use types::item::ItemRecord;

/// Lookup from (user, set) to that user's inventory for that set
///
/// Bucket order is input order, so a fixed input snapshot always produces
/// the same index.
pub struct InventoryIndex<'a> {
    buckets: HashMap<(UserId, SetId), Vec<&'a ItemRecord>>,
}

impl<'a> InventoryIndex<'a> {
    /// Build the index in one pass over the snapshot
    pub fn build(items: &'a [ItemRecord]) -> Self {
        let mut buckets: HashMap<(UserId, SetId), Vec<&'a ItemRecord>> = HashMap::new();
        for item in items {
            buckets.entry((item.user_id, item.set_id)).or_default().push(item);
        }
        Self { buckets }
    }

    /// One user's inventory for one set; missing buckets read as empty
    pub fn inventory(&self, user_id: UserId, set_id: SetId) -> &[&'a ItemRecord] {
        self.buckets
            .get(&(user_id, set_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct (user, set) buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
