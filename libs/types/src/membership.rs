//! User-set membership records

use crate::ids::{CategoryId, SetId, SetTypeId, UserId};
use serde::{Deserialize, Serialize};

/// One user-set membership row: the user tracks this set
///
/// Carries its own copy of the set's classification. Rows whose
/// classification disagrees with the set's current one are stale and get
/// silently excluded from per-set matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRecord {
    /// Row key from the memberships table.
    pub id: i64,
    /// The tracking user. Wire name kept from the upstream store.
    #[serde(rename = "usersId")]
    pub user_id: UserId,
    pub set_id: SetId,
    pub set_type_id: SetTypeId,
    pub category_id: CategoryId,
}
