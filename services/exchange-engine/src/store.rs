//! Storage read handles
//!
//! The engine receives its inputs through this trait instead of reaching for
//! ambient repository singletons, so tests can hand it fixture snapshots.
//! All reads are bulk: one blocking fetch boundary per operation, never
//! interleaved with the computation.

use serde::{Deserialize, Serialize};
use types::errors::StoreError;
use types::ids::{SetId, UserId};
use types::item::ItemRecord;
use types::membership::MembershipRecord;
use types::set::{SetRecord, SetTypeRecord};
use types::user::UserRecord;

/// Read-only access to the five entity collections
///
/// Implementations must return data snapshotted at call time; the engine
/// performs no writes and tolerates missing cross-references.
pub trait CollectionStore {
    fn list_users(&self) -> Result<Vec<UserRecord>, StoreError>;
    fn list_sets(&self) -> Result<Vec<SetRecord>, StoreError>;
    fn list_set_types(&self) -> Result<Vec<SetTypeRecord>, StoreError>;
    fn list_memberships(&self) -> Result<Vec<MembershipRecord>, StoreError>;
    fn list_items(&self, filter: Option<&ItemFilter>) -> Result<Vec<ItemRecord>, StoreError>;
}

/// Narrows an item read to one set and/or a group of users
///
/// The set finder reads only `{requester, candidates} x {set}` instead of
/// the whole items table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFilter {
    #[serde(default)]
    pub set_id: Option<SetId>,
    #[serde(default)]
    pub user_ids: Option<Vec<UserId>>,
}

impl ItemFilter {
    /// Filter down to a single set
    pub fn for_set(set_id: SetId) -> Self {
        Self {
            set_id: Some(set_id),
            user_ids: None,
        }
    }

    /// Additionally restrict to the given users
    pub fn with_users(mut self, user_ids: Vec<UserId>) -> Self {
        self.user_ids = Some(user_ids);
        self
    }

    /// Check whether an item passes the filter
    pub fn matches(&self, item: &ItemRecord) -> bool {
        if let Some(set_id) = self.set_id {
            if item.set_id != set_id {
                return false;
            }
        }
        if let Some(user_ids) = &self.user_ids {
            if !user_ids.contains(&item.user_id) {
                return false;
            }
        }
        true
    }
}

/// In-memory [`CollectionStore`] over a full snapshot
///
/// Used by tests and by callers that already hold the five collections.
/// Applies [`ItemFilter`] in one linear pass.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    pub users: Vec<UserRecord>,
    pub sets: Vec<SetRecord>,
    pub set_types: Vec<SetTypeRecord>,
    pub memberships: Vec<MembershipRecord>,
    pub items: Vec<ItemRecord>,
}

impl CollectionStore for SnapshotStore {
    fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.users.clone())
    }

    fn list_sets(&self) -> Result<Vec<SetRecord>, StoreError> {
        Ok(self.sets.clone())
    }

    fn list_set_types(&self) -> Result<Vec<SetTypeRecord>, StoreError> {
        Ok(self.set_types.clone())
    }

    fn list_memberships(&self) -> Result<Vec<MembershipRecord>, StoreError> {
        Ok(self.memberships.clone())
    }

    fn list_items(&self, filter: Option<&ItemFilter>) -> Result<Vec<ItemRecord>, StoreError> {
        match filter {
            None => Ok(self.items.clone()),
            Some(filter) => Ok(self
                .items
                .iter()
                .filter(|item| filter.matches(item))
                .cloned()
                .collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::ItemId;
    use types::item::ItemStatus;

    fn item(id: i64, user: i64, set: i64) -> ItemRecord {
        ItemRecord {
            id: ItemId::new(id),
            number: id.to_string(),
            status: ItemStatus::Needed,
            is_duplicate: None,
            description: None,
            set_id: SetId::new(set),
            user_id: UserId::new(user),
            category_id: None,
        }
    }

    #[test]
    fn test_filter_by_set() {
        let filter = ItemFilter::for_set(SetId::new(1));
        assert!(filter.matches(&item(1, 10, 1)));
        assert!(!filter.matches(&item(2, 10, 2)));
    }

    #[test]
    fn test_filter_by_set_and_users() {
        let filter = ItemFilter::for_set(SetId::new(1)).with_users(vec![UserId::new(10)]);
        assert!(filter.matches(&item(1, 10, 1)));
        assert!(!filter.matches(&item(2, 11, 1)));
    }

    #[test]
    fn test_unfiltered_matches_everything() {
        let filter = ItemFilter::default();
        assert!(filter.matches(&item(1, 10, 1)));
    }

    #[test]
    fn test_snapshot_store_applies_filter() {
        let store = SnapshotStore {
            items: vec![item(1, 10, 1), item(2, 11, 1), item(3, 10, 2)],
            ..Default::default()
        };

        let all = store.list_items(None).unwrap();
        assert_eq!(all.len(), 3);

        let filter = ItemFilter::for_set(SetId::new(1)).with_users(vec![UserId::new(10)]);
        let narrowed = store.list_items(Some(&filter)).unwrap();
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].id, ItemId::new(1));
    }
}
