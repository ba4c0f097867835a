//! User records

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// A user row, read-only input from the storage collaborator
///
/// Contact fields are optional in the store; the exchange output defaults
/// them to empty strings rather than omitting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}
