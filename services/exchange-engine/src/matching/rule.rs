//! The pairwise matching rule
//!
//! Given two inventories for the same set, computes what each side can give
//! the other. Pure function of its two arguments, so it is independently
//! testable outside the finders.
//!
//! Matching is many-to-one and consumes nothing: a surplus item stays
//! offerable across every pairing it appears in. This is read-only
//! discovery, not reservation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use types::exchange::ItemOffer;
use types::item::ItemRecord;

use crate::matching::classes;

/// What each side of a pair can give the other for one set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    /// Offers from side A to side B.
    pub a_can_give: Vec<ItemOffer>,
    /// Offers from side B to side A.
    pub b_can_give: Vec<ItemOffer>,
}

impl MatchOutcome {
    /// Nothing to give in either direction
    pub fn is_empty(&self) -> bool {
        self.a_can_give.is_empty() && self.b_can_give.is_empty()
    }
}

/// Compute both directions of a pair over the same set
///
/// A surplus item is offered when the counterpart needs an item with the
/// same `(number, duplicate_class)` key. Offers keep the give side's input
/// order.
pub fn match_pair(inventory_a: &[&ItemRecord], inventory_b: &[&ItemRecord]) -> MatchOutcome {
    let (a_give, a_need) = classes::partition(inventory_a);
    let (b_give, b_need) = classes::partition(inventory_b);

    MatchOutcome {
        a_can_give: give_against(&a_give, &b_need),
        b_can_give: give_against(&b_give, &a_need),
    }
}

/// Offers from `give` that satisfy some item in `need`
///
/// Hashes the need keys once instead of rescanning the need list per give
/// item; the matching set is identical to the nested-scan formulation.
fn give_against<'a>(give: &[&'a ItemRecord], need: &[&'a ItemRecord]) -> Vec<ItemOffer> {
    let need_keys: HashSet<(&str, bool)> = need.iter().copied().map(classes::offer_key).collect();

    give.iter()
        .copied()
        .filter(|item| need_keys.contains(&classes::offer_key(item)))
        .map(ItemOffer::from_item)
        .collect()
}
