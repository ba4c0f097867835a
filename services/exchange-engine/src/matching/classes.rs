//! Matching classes
//!
//! Derives, per item, which side of an exchange it can sit on:
//! - *give*: held as surplus
//! - *need*: missing, whether ordinary or urgent
//!
//! A collected item sits on neither side and never matches.

use types::item::ItemRecord;

/// Key under which an item matches: `(number, duplicate_class)`
///
/// Numbers compare as strings. The duplicate flag collapses to its
/// normalized class, so an unset flag keys identically to explicit false.
pub fn offer_key(item: &ItemRecord) -> (&str, bool) {
    (item.number.as_str(), item.duplicate_class())
}

/// Check if an item can be given away
pub fn can_give(item: &ItemRecord) -> bool {
    item.status.is_surplus()
}

/// Check if an item is wanted
pub fn needs(item: &ItemRecord) -> bool {
    item.status.is_needed()
}

/// Split an inventory into its (give, need) classes, preserving order
pub fn partition<'a>(inventory: &[&'a ItemRecord]) -> (Vec<&'a ItemRecord>, Vec<&'a ItemRecord>) {
    let give = inventory.iter().copied().filter(|item| can_give(item)).collect();
    let need = inventory.iter().copied().filter(|item| needs(item)).collect();
    (give, need)
}
