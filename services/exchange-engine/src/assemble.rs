//! Result assembly
//!
//! Orders and deduplicates per-user edge lists into the final response
//! shape. Upstream membership duplicates must never surface as duplicate
//! edges, and edge order must be stable across identical snapshots.

use std::collections::{HashMap, HashSet};

use types::exchange::ExchangeEdge;
use types::ids::{SetId, SetTypeId};
use types::set::{SetRecord, SetTypeRecord};

/// Per-invocation lookup over sets and set types
///
/// Built once per scan; resolves edge names and sort keys. Dangling set ids
/// resolve to an empty name and a zero sort key rather than an error.
pub struct SetCatalog<'a> {
    sets: HashMap<SetId, &'a SetRecord>,
    set_types: HashMap<SetTypeId, &'a SetTypeRecord>,
}

impl<'a> SetCatalog<'a> {
    /// Index the set and set type snapshots
    pub fn build(sets: &'a [SetRecord], set_types: &'a [SetTypeRecord]) -> Self {
        Self {
            sets: sets.iter().map(|s| (s.id, s)).collect(),
            set_types: set_types.iter().map(|t| (t.id, t)).collect(),
        }
    }

    /// Look up a set record
    pub fn set(&self, set_id: SetId) -> Option<&'a SetRecord> {
        self.sets.get(&set_id).copied()
    }

    /// Set name for output; a dangling reference reads as empty
    pub fn set_name(&self, set_id: SetId) -> String {
        self.set(set_id).map(|s| s.name.clone()).unwrap_or_default()
    }

    /// Sort key: set type order first, then set order, missing orders as 0
    fn sort_key(&self, set_id: SetId) -> (i64, i64) {
        let set = self.set(set_id);
        let type_order = set
            .and_then(|s| self.set_types.get(&s.set_type_id))
            .and_then(|t| t.order)
            .unwrap_or(0);
        let set_order = set.and_then(|s| s.order).unwrap_or(0);
        (type_order, set_order)
    }

    /// Sort edges by `(set_type.order, set.order)` ascending
    ///
    /// Stable: ties keep their relative input order.
    pub fn sort_edges(&self, edges: &mut [ExchangeEdge]) {
        edges.sort_by_key(|edge| self.sort_key(edge.set_id));
    }
}

/// Drop repeated edges for the same set, keeping the first occurrence
///
/// Guards against duplicate upstream membership rows producing two edges
/// for one set.
pub fn dedup_edges(edges: Vec<ExchangeEdge>) -> Vec<ExchangeEdge> {
    let mut seen: HashSet<SetId> = HashSet::new();
    edges.into_iter().filter(|edge| seen.insert(edge.set_id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::exchange::ItemOffer;
    use types::ids::CategoryId;

    fn edge(set_id: i64, marker: &str) -> ExchangeEdge {
        ExchangeEdge {
            set_id: SetId::new(set_id),
            set_name: marker.to_string(),
            user_a_can_give: vec![ItemOffer {
                number: marker.to_string(),
                is_duplicate: false,
                description: String::new(),
            }],
            user_b_can_give: vec![],
        }
    }

    fn set(id: i64, set_type: i64, order: Option<i64>) -> SetRecord {
        SetRecord {
            id: SetId::new(id),
            name: format!("set-{id}"),
            min_number: 1,
            max_number: 100,
            image: None,
            link: None,
            order,
            group: None,
            extra_numbers: None,
            set_type_id: SetTypeId::new(set_type),
            category_id: CategoryId::new(1),
        }
    }

    fn set_type(id: i64, order: Option<i64>) -> SetTypeRecord {
        SetTypeRecord {
            id: SetTypeId::new(id),
            name: format!("type-{id}"),
            icon: None,
            order,
            category_id: CategoryId::new(1),
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let edges = vec![edge(1, "first"), edge(2, "other"), edge(1, "second")];
        let deduped = dedup_edges(edges);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].set_name, "first");
        assert_eq!(deduped[1].set_name, "other");
    }

    #[test]
    fn test_sort_by_type_order_then_set_order() {
        // Types with orders [2, 1]; each type has sets with orders [5, 3].
        let sets = vec![
            set(1, 10, Some(5)),
            set(2, 10, Some(3)),
            set(3, 11, Some(5)),
            set(4, 11, Some(3)),
        ];
        let set_types = vec![set_type(10, Some(2)), set_type(11, Some(1))];
        let catalog = SetCatalog::build(&sets, &set_types);

        let mut edges = vec![edge(1, "a"), edge(2, "b"), edge(3, "c"), edge(4, "d")];
        catalog.sort_edges(&mut edges);

        let order: Vec<i64> = edges.iter().map(|e| e.set_id.as_i64()).collect();
        assert_eq!(order, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_missing_orders_default_to_zero() {
        let sets = vec![set(1, 10, Some(1)), set(2, 10, None)];
        let set_types = vec![set_type(10, None)];
        let catalog = SetCatalog::build(&sets, &set_types);

        let mut edges = vec![edge(1, "ordered"), edge(2, "unordered")];
        catalog.sort_edges(&mut edges);

        // order None sorts as 0, ahead of 1
        assert_eq!(edges[0].set_id, SetId::new(2));
        assert_eq!(edges[1].set_id, SetId::new(1));
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let sets = vec![set(1, 10, Some(1)), set(2, 10, Some(1))];
        let set_types = vec![set_type(10, Some(1))];
        let catalog = SetCatalog::build(&sets, &set_types);

        let mut edges = vec![edge(2, "first-in"), edge(1, "second-in")];
        catalog.sort_edges(&mut edges);

        assert_eq!(edges[0].set_name, "first-in");
        assert_eq!(edges[1].set_name, "second-in");
    }

    #[test]
    fn test_dangling_set_id_tolerated() {
        let catalog = SetCatalog::build(&[], &[]);
        assert_eq!(catalog.set_name(SetId::new(99)), "");

        let mut edges = vec![edge(99, "dangling")];
        catalog.sort_edges(&mut edges);
        assert_eq!(edges.len(), 1);
    }
}
