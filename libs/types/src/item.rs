//! Inventory item records and status lifecycle
//!
//! Each record states how one numbered item stands in one user's copy of one
//! set: still missing, collected, held as surplus, or urgently wanted.

use crate::ids::{CategoryId, ItemId, SetId, UserId};
use serde::{Deserialize, Serialize};

/// Status of an item within a user's inventory
///
/// State IDs match the upstream store for wire compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ItemStatus {
    /// State 0: item is missing and wanted
    Needed,
    /// State 1: item is collected (never participates in matching)
    Collected,
    /// State 2: item is held as surplus and offered for exchange
    Surplus,
    /// State 3: item is missing and urgently wanted
    NeededUrgent,
}

impl ItemStatus {
    /// Get the state ID for wire protocol
    pub fn state_id(&self) -> u8 {
        match self {
            ItemStatus::Needed => 0,
            ItemStatus::Collected => 1,
            ItemStatus::Surplus => 2,
            ItemStatus::NeededUrgent => 3,
        }
    }

    /// Parse a wire state ID
    pub fn from_state_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(ItemStatus::Needed),
            1 => Some(ItemStatus::Collected),
            2 => Some(ItemStatus::Surplus),
            3 => Some(ItemStatus::NeededUrgent),
            _ => None,
        }
    }

    /// Check if this status counts as a missing item
    ///
    /// Both missing states are equally satisfiable by a counterpart's surplus.
    pub fn is_needed(&self) -> bool {
        matches!(self, ItemStatus::Needed | ItemStatus::NeededUrgent)
    }

    /// Check if this status marks an item offered for exchange
    pub fn is_surplus(&self) -> bool {
        matches!(self, ItemStatus::Surplus)
    }
}

impl From<ItemStatus> for u8 {
    fn from(status: ItemStatus) -> u8 {
        status.state_id()
    }
}

impl TryFrom<u8> for ItemStatus {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        ItemStatus::from_state_id(id).ok_or_else(|| format!("unknown item status id: {id}"))
    }
}

/// One inventory item row, read-only input from the storage collaborator
///
/// Invariant: for a given (user, set, number) at most one record should
/// logically represent that item's status. Malformed input that violates
/// this is not deduplicated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Row key from the items table.
    pub id: ItemId,
    /// Item number within the set. Always compared as a string.
    pub number: String,
    /// Inventory status.
    pub status: ItemStatus,
    /// Duplicate-variant flag. Unset means "not a duplicate".
    #[serde(default)]
    pub is_duplicate: Option<bool>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Set this item belongs to.
    pub set_id: SetId,
    /// User whose inventory this row belongs to.
    pub user_id: UserId,
    /// Category, when the upstream row carries one.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

impl ItemRecord {
    /// Reduce the duplicate flag to its matching class.
    ///
    /// Anything other than literal `Some(true)` is `false`: unset and
    /// explicit false are indistinguishable to matching. The matching key
    /// is `(number, duplicate_class)`.
    pub fn duplicate_class(&self) -> bool {
        matches!(self.is_duplicate, Some(true))
    }
}
