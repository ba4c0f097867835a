//! Exchange engine core
//!
//! Main coordinator for the two finder operations. Each invocation reads a
//! fresh snapshot through the store handles, cross-indexes it, applies the
//! pairwise rule per candidate and set, and assembles the ordered result.
//!
//! The public finders never fail: any internal error is logged and degrades
//! to an empty result list, indistinguishable on the wire from a legitimate
//! "nothing found".

use std::collections::HashSet;

use tracing::{debug, error};
use types::errors::ExchangeError;
use types::exchange::{ExchangeEdge, UserExchangeGroup, UserSummary};
use types::ids::{SetId, UserId};

use crate::assemble::{dedup_edges, SetCatalog};
use crate::index::InventoryIndex;
use crate::matching::match_pair;
use crate::store::{CollectionStore, ItemFilter};

/// The exchange matching engine
///
/// Stateless apart from its injected read handles; every operation builds
/// its own transient index and discards it with the response. Concurrent
/// invocations are safe by construction.
pub struct ExchangeEngine<S> {
    store: S,
}

impl<S: CollectionStore> ExchangeEngine<S> {
    /// Create an engine over the given read handles
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Find every user the requester could exchange with, across all sets
    ///
    /// Groups follow the order users were encountered in the scan; edges
    /// within a group are deduplicated by set and sorted by
    /// `(set_type.order, set.order)`.
    pub fn find_global_exchanges(&self, user_id: UserId) -> Vec<UserExchangeGroup> {
        match self.global_scan(user_id) {
            Ok(groups) => groups,
            Err(err) => {
                error!(%user_id, %err, "global exchange scan failed, returning empty result");
                Vec::new()
            }
        }
    }

    /// Find exchanges for one set between the requester and its holders
    ///
    /// An absent set yields an empty result, not an error. Each qualifying
    /// counterpart contributes one group with exactly one edge.
    pub fn find_set_exchanges(&self, set_id: SetId, user_id: UserId) -> Vec<UserExchangeGroup> {
        match self.set_scan(set_id, user_id) {
            Ok(groups) => groups,
            Err(ExchangeError::SetNotFound { set_id }) => {
                debug!(%set_id, "target set not found, returning empty result");
                Vec::new()
            }
            Err(err) => {
                error!(%set_id, %user_id, %err, "set exchange scan failed, returning empty result");
                Vec::new()
            }
        }
    }

    fn global_scan(&self, user_id: UserId) -> Result<Vec<UserExchangeGroup>, ExchangeError> {
        let users = self.store.list_users()?;
        let sets = self.store.list_sets()?;
        let set_types = self.store.list_set_types()?;
        let memberships = self.store.list_memberships()?;
        let items = self.store.list_items(None)?;

        let index = InventoryIndex::build(&items);
        let catalog = SetCatalog::build(&sets, &set_types);

        // The requester's memberships, in row order. Duplicate rows survive
        // here and are squeezed out by the edge dedup below.
        let current_set_ids: Vec<SetId> = memberships
            .iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.set_id)
            .collect();

        let mut groups = Vec::new();
        for user in &users {
            // Never match the requester against themself, whatever the
            // membership rows claim.
            if user.id == user_id {
                continue;
            }

            let their_set_ids: HashSet<SetId> = memberships
                .iter()
                .filter(|m| m.user_id == user.id)
                .map(|m| m.set_id)
                .collect();

            let mut edges: Vec<ExchangeEdge> = Vec::new();
            for &set_id in current_set_ids.iter().filter(|id| their_set_ids.contains(id)) {
                let mine = index.inventory(user_id, set_id);
                let theirs = index.inventory(user.id, set_id);
                if mine.is_empty() || theirs.is_empty() {
                    continue;
                }

                let outcome = match_pair(mine, theirs);
                if outcome.is_empty() {
                    continue;
                }

                edges.push(ExchangeEdge {
                    set_id,
                    set_name: catalog.set_name(set_id),
                    user_a_can_give: outcome.a_can_give,
                    user_b_can_give: outcome.b_can_give,
                });
            }

            if edges.is_empty() {
                continue;
            }

            let mut edges = dedup_edges(edges);
            catalog.sort_edges(&mut edges);
            groups.push(UserExchangeGroup {
                user: UserSummary::from_record(user),
                edges,
            });
        }

        Ok(groups)
    }

    fn set_scan(&self, set_id: SetId, user_id: UserId) -> Result<Vec<UserExchangeGroup>, ExchangeError> {
        let sets = self.store.list_sets()?;
        let set = sets
            .iter()
            .find(|s| s.id == set_id)
            .ok_or(ExchangeError::SetNotFound { set_id })?;

        // Membership rows must agree with the set's current classification;
        // stale rows are dropped, not reported.
        let memberships = self.store.list_memberships()?;
        let holder_ids: HashSet<UserId> = memberships
            .iter()
            .filter(|m| {
                m.set_id == set_id
                    && m.category_id == set.category_id
                    && m.set_type_id == set.set_type_id
            })
            .map(|m| m.user_id)
            .collect();
        if holder_ids.is_empty() {
            return Ok(Vec::new());
        }

        // Candidate order follows the user scan; rows pointing at absent
        // users drop out here.
        let users = self.store.list_users()?;
        let candidates: Vec<_> = users
            .iter()
            .filter(|u| u.id != user_id && holder_ids.contains(&u.id))
            .collect();
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut scope: Vec<UserId> = candidates.iter().map(|u| u.id).collect();
        scope.push(user_id);
        let filter = ItemFilter::for_set(set_id).with_users(scope);
        let items = self.store.list_items(Some(&filter))?;
        let index = InventoryIndex::build(&items);

        let mut groups = Vec::new();
        for candidate in candidates {
            let mine = index.inventory(user_id, set_id);
            let theirs = index.inventory(candidate.id, set_id);
            if mine.is_empty() || theirs.is_empty() {
                continue;
            }

            let outcome = match_pair(mine, theirs);
            if outcome.is_empty() {
                continue;
            }

            groups.push(UserExchangeGroup {
                user: UserSummary::from_record(candidate),
                edges: vec![ExchangeEdge {
                    set_id,
                    set_name: set.name.clone(),
                    user_a_can_give: outcome.a_can_give,
                    user_b_can_give: outcome.b_can_give,
                }],
            });
        }

        Ok(groups)
    }
}
