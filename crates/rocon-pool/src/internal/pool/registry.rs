use hashbrown::hash_map::Entry;
use std::fmt::{Display, Formatter};

use crate::internal::common::error::PoolError;
use crate::internal::common::{Map, Set};
use crate::internal::pool::identity::{IdentityPattern, PlatformIdentity};
use crate::internal::pool::platform::{KnownPlatform, Platform, PlatformDescriptor};
use crate::internal::pool::request::CapabilityRequest;

/// Candidate sets, one per requested item and in the same order as the items.
pub type MatchList = Vec<Set<PlatformIdentity>>;

/// All platforms known to a scheduler, keyed by their identity.
///
/// The pool is a plain owned value; the allocation and release operations
/// take `&mut self`. Use [`SharedResourcePool`](crate::pool::SharedResourcePool)
/// when several threads need access to one pool.
#[derive(Debug, Default, Clone)]
pub struct ResourcePool {
    platforms: Map<PlatformIdentity, Platform>,
}

impl ResourcePool {
    /// Builds a pool from a discovery snapshot, every platform starts as available.
    pub fn new(snapshot: impl IntoIterator<Item = PlatformDescriptor>) -> crate::Result<Self> {
        let snapshot = snapshot.into_iter();
        let mut platforms = Map::with_capacity_and_hasher(snapshot.size_hint().0, Default::default());
        for descriptor in snapshot {
            match platforms.entry(descriptor.identity.clone()) {
                Entry::Occupied(entry) => {
                    return Err(PoolError::DuplicateResource(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(Platform::new(descriptor));
                }
            }
        }
        log::debug!("Resource pool created with {} platform(s)", platforms.len());
        Ok(ResourcePool { platforms })
    }

    #[inline]
    pub fn get(&self, identity: &str) -> Option<&Platform> {
        self.platforms.get(identity)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, identity: &str) -> Option<&mut Platform> {
        self.platforms.get_mut(identity)
    }

    #[inline]
    pub fn contains(&self, identity: &str) -> bool {
        self.platforms.contains_key(identity)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values()
    }

    /// Identities of all *available* platforms that provide the requested
    /// capability and whose identity matches the requested pattern.
    pub fn match_subset(&self, request: &CapabilityRequest) -> Set<PlatformIdentity> {
        let pattern = match IdentityPattern::parse(&request.pattern) {
            Ok(pattern) => pattern,
            Err(error) => {
                log::debug!("Request {request} cannot match any platform: {error}");
                return Set::default();
            }
        };
        self.platforms
            .values()
            .filter(|platform| {
                platform.is_available()
                    && platform.has_capability(&request.capability)
                    && pattern.matches(platform.identity())
            })
            .map(|platform| platform.identity().clone())
            .collect()
    }

    /// Applies [`match_subset`](Self::match_subset) to every request.
    ///
    /// The result is a list rather than a map, identical requests are legal
    /// and each of them gets its own candidate set.
    pub fn match_list(&self, requests: &[CapabilityRequest]) -> MatchList {
        requests.iter().map(|rq| self.match_subset(rq)).collect()
    }

    /// Snapshot of the whole pool, sorted by identity.
    pub fn known_resources(&self) -> Vec<KnownPlatform> {
        let mut known: Vec<KnownPlatform> = self.platforms.values().map(|p| p.to_known()).collect();
        known.sort_unstable_by(|a, b| a.identity.cmp(&b.identity));
        known
    }
}

impl Display for ResourcePool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for platform in self.known_resources() {
            writeln!(f, "{platform}")?;
        }
        Ok(())
    }
}
