//! Exchange result types
//!
//! Output-only shapes produced by the exchange engine. All of them are
//! transient: constructed fresh per request and discarded once the response
//! is serialized. Wire names match the upstream REST layer's response
//! schema (`user1CanGive`/`user2CanGive`, flattened user fields).

use crate::ids::{SetId, UserId};
use crate::item::ItemRecord;
use crate::user::UserRecord;
use serde::{Deserialize, Serialize};

/// One item a user can hand over to the counterpart
///
/// The duplicate flag is the normalized matching class and the description
/// defaults to empty, exactly as the upstream API shapes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOffer {
    pub number: String,
    pub is_duplicate: bool,
    pub description: String,
}

impl ItemOffer {
    /// Build an offer from an inventory item record
    pub fn from_item(item: &ItemRecord) -> Self {
        Self {
            number: item.number.clone(),
            is_duplicate: item.duplicate_class(),
            description: item.description.clone().unwrap_or_default(),
        }
    }
}

/// Counterpart user identity, copied verbatim from the user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "userName")]
    pub name: String,
    #[serde(rename = "userEmail")]
    pub email: String,
    #[serde(rename = "userLogo")]
    pub logo: String,
}

impl UserSummary {
    /// Build a summary from a user record, defaulting unset contact fields
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone().unwrap_or_default(),
            logo: user.logo.clone().unwrap_or_default(),
        }
    }
}

/// What each side can give the other within one shared set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeEdge {
    pub set_id: SetId,
    pub set_name: String,
    /// Offers from the requesting user to the counterpart.
    #[serde(rename = "user1CanGive")]
    pub user_a_can_give: Vec<ItemOffer>,
    /// Offers from the counterpart to the requesting user.
    #[serde(rename = "user2CanGive")]
    pub user_b_can_give: Vec<ItemOffer>,
}

impl ExchangeEdge {
    /// An edge with nothing to give in either direction carries no
    /// information and is never emitted.
    pub fn is_empty(&self) -> bool {
        self.user_a_can_give.is_empty() && self.user_b_can_give.is_empty()
    }
}

/// All possible exchanges with one counterpart user
///
/// Emitted only when at least one edge is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserExchangeGroup {
    #[serde(flatten)]
    pub user: UserSummary,
    #[serde(rename = "exchanges")]
    pub edges: Vec<ExchangeEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ItemId, SetId, UserId};
    use crate::item::ItemStatus;

    fn surplus_item(number: &str, is_duplicate: Option<bool>, description: Option<&str>) -> ItemRecord {
        ItemRecord {
            id: ItemId::new(1),
            number: number.to_string(),
            status: ItemStatus::Surplus,
            is_duplicate,
            description: description.map(str::to_string),
            set_id: SetId::new(1),
            user_id: UserId::new(1),
            category_id: None,
        }
    }

    #[test]
    fn test_offer_normalizes_unset_fields() {
        let offer = ItemOffer::from_item(&surplus_item("42", None, None));
        assert_eq!(offer.number, "42");
        assert!(!offer.is_duplicate);
        assert_eq!(offer.description, "");
    }

    #[test]
    fn test_offer_keeps_duplicate_flag_and_description() {
        let offer = ItemOffer::from_item(&surplus_item("42", Some(true), Some("shiny")));
        assert!(offer.is_duplicate);
        assert_eq!(offer.description, "shiny");
    }

    #[test]
    fn test_user_summary_defaults() {
        let user = UserRecord {
            id: UserId::new(3),
            name: "Ana".to_string(),
            email: None,
            phone: None,
            logo: None,
            username: None,
            contact_email: None,
        };
        let summary = UserSummary::from_record(&user);
        assert_eq!(summary.email, "");
        assert_eq!(summary.logo, "");
    }

    #[test]
    fn test_group_wire_shape_is_flattened() {
        let group = UserExchangeGroup {
            user: UserSummary {
                user_id: UserId::new(2),
                name: "Bea".to_string(),
                email: "bea@example.com".to_string(),
                logo: String::new(),
            },
            edges: vec![ExchangeEdge {
                set_id: SetId::new(9),
                set_name: "Animals".to_string(),
                user_a_can_give: vec![],
                user_b_can_give: vec![ItemOffer {
                    number: "7".to_string(),
                    is_duplicate: false,
                    description: String::new(),
                }],
            }],
        };

        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["userId"], 2);
        assert_eq!(json["userName"], "Bea");
        assert_eq!(json["exchanges"][0]["setId"], 9);
        assert_eq!(json["exchanges"][0]["user2CanGive"][0]["number"], "7");
    }

    #[test]
    fn test_edge_emptiness() {
        let edge = ExchangeEdge {
            set_id: SetId::new(1),
            set_name: String::new(),
            user_a_can_give: vec![],
            user_b_can_give: vec![],
        };
        assert!(edge.is_empty());
    }
}
