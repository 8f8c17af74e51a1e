use itertools::Itertools;
use smallvec::{SmallVec, smallvec};

use crate::internal::common::Set;
use crate::internal::common::ids::RequestId;
use crate::internal::pool::identity::PlatformIdentity;
use crate::internal::pool::registry::ResourcePool;
use crate::internal::pool::request::{
    AllocationBatch, AllocationFailure, Assignment, CapabilityRequest,
};

/// Batches with more items than this are only tried in their given order.
pub const MAX_PERMUTED_ITEMS: usize = 3;

type Reservations = SmallVec<[Option<PlatformIdentity>; MAX_PERMUTED_ITEMS]>;

impl ResourcePool {
    /// Allocates one platform for every item of `batch`, or nothing at all.
    ///
    /// Items are first processed in batch order; every item only sees
    /// platforms that are still available, including those reserved by the
    /// items before it. If that fails for a small batch, the remaining
    /// processing orders are tried as well. On success the assignments are
    /// returned in batch order and the platforms are owned by the batch
    /// request. On failure the pool is left exactly as it was.
    pub fn allocate(&mut self, batch: &AllocationBatch) -> Result<Vec<Assignment>, AllocationFailure> {
        let items = batch.items();
        let owner = batch.request_id();
        let in_order: Vec<usize> = (0..items.len()).collect();

        let failure = match self.allocate_in_order(owner, items, &in_order) {
            Ok(assignments) => {
                log::debug!(
                    "Request {owner} allocated: {}",
                    assignments.iter().join(", ")
                );
                return Ok(assignments);
            }
            Err(failure) => failure,
        };

        if self.worth_permuting(items) {
            for order in (0..items.len()).permutations(items.len()).skip(1) {
                if let Ok(assignments) = self.allocate_in_order(owner, items, &order) {
                    log::debug!(
                        "Request {owner} allocated in order {order:?}: {}",
                        assignments.iter().join(", ")
                    );
                    return Ok(assignments);
                }
            }
        }

        log::debug!("Request {owner} cannot be allocated: {failure}");
        Err(failure)
    }

    /// Another order can only help if every item has some candidate and
    /// there are at least as many distinct candidates as items.
    fn worth_permuting(&self, items: &[CapabilityRequest]) -> bool {
        if items.len() < 2 || items.len() > MAX_PERMUTED_ITEMS {
            return false;
        }
        let matches = self.match_list(items);
        if matches.iter().any(|subset| subset.is_empty()) {
            return false;
        }
        let union: Set<&PlatformIdentity> = matches.iter().flatten().collect();
        union.len() >= items.len()
    }

    fn allocate_in_order(
        &mut self,
        owner: RequestId,
        items: &[CapabilityRequest],
        order: &[usize],
    ) -> Result<Vec<Assignment>, AllocationFailure> {
        let mut reserved: Reservations = smallvec![None; items.len()];
        for &index in order {
            let item = &items[index];
            let Some(identity) = select_candidate(self.match_subset(item)) else {
                self.rollback(&reserved);
                return Err(AllocationFailure::new(index, item));
            };
            if let Some(platform) = self.get_mut(identity.as_str()) {
                platform.set_allocated(owner);
            }
            reserved[index] = Some(identity);
        }
        Ok(reserved
            .into_iter()
            .flatten()
            .zip(items)
            .map(|(identity, item)| Assignment::new(item.capability.clone(), identity))
            .collect())
    }

    fn rollback(&mut self, reserved: &Reservations) {
        for identity in reserved.iter().flatten() {
            if let Some(platform) = self.get_mut(identity.as_str()) {
                platform.set_available();
            }
        }
    }
}

/// Any candidate would do; the smallest identity keeps allocation reproducible.
fn select_candidate(candidates: Set<PlatformIdentity>) -> Option<PlatformIdentity> {
    candidates.into_iter().min()
}
