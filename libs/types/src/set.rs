//! Collection set and set type records

use crate::ids::{CategoryId, SetId, SetTypeId};
use serde::{Deserialize, Serialize};

/// A collection set (one album/series of numbered items)
///
/// Read-only input from the storage collaborator. Only `id`, `name`,
/// `order`, `set_type_id` and `category_id` matter to matching; the rest
/// rides along so callers holding a full record can pass it through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    pub id: SetId,
    pub name: String,
    /// Lowest item number in the set.
    #[serde(rename = "minNr")]
    pub min_number: i64,
    /// Highest item number in the set.
    #[serde(rename = "maxNr")]
    pub max_number: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Display order within the set type. Missing sorts as 0.
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub group: Option<String>,
    /// Comma-separated extra numbers outside the min/max range.
    #[serde(default)]
    pub extra_numbers: Option<String>,
    pub set_type_id: SetTypeId,
    pub category_id: CategoryId,
}

/// A set type (the grouping sets are displayed under)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTypeRecord {
    pub id: SetTypeId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Display order across set types. Missing sorts as 0.
    #[serde(default)]
    pub order: Option<i64>,
    pub category_id: CategoryId,
}
