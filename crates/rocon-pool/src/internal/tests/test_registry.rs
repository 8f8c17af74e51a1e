use crate::internal::common::error::PoolError;
use crate::internal::pool::platform::PlatformStatus;
use crate::internal::pool::registry::ResourcePool;
use crate::internal::pool::request::CapabilityRequest;
use crate::internal::tests::utils::*;

#[test]
fn test_empty_pool() {
    let pool = ResourcePool::default();
    assert_eq!(pool.len(), 0);
    assert!(pool.is_empty());
    assert!(!pool.contains(MARVIN_NAME));
    assert!(pool.get(MARVIN_NAME).is_none());
    assert!(pool.known_resources().is_empty());
}

#[test]
fn test_one_resource_pool() {
    let pool = singleton_pool();
    assert_eq!(pool.len(), 1);
    assert!(pool.contains(ROBERTO_NAME));
    assert!(!pool.contains(MARVIN_NAME));
    assert_available(&pool, ROBERTO_NAME);
}

#[test]
fn test_two_resource_pool() {
    let pool = doubleton_pool();
    assert_eq!(pool.len(), 2);
    assert!(pool.contains(ROBERTO_NAME));
    assert!(pool.contains(MARVIN_NAME));
    let roberto = pool.get(ROBERTO_NAME).unwrap();
    assert_eq!(roberto.identity().as_str(), ROBERTO_NAME);
    assert!(roberto.has_capability(TELEOP_RAPP));
    assert!(roberto.has_capability(EXAMPLE_RAPP));
    assert!(!roberto.has_capability("rocon_apps/other"));
    assert_eq!(roberto.capabilities().len(), 2);
}

#[test]
fn test_lookup_by_identity() {
    let pool = doubleton_pool();
    let marvin = identity(MARVIN_NAME);
    assert!(pool.get(marvin.as_str()).is_some());
    assert!(pool.get("rocon:///linux/precise/ros/turtlebot/zaphod").is_none());
    assert!(pool.get("not an identity").is_none());
}

#[test]
fn test_duplicate_resource() {
    let result = ResourcePool::new(vec![
        descriptor(MARVIN_NAME, &[TELEOP_RAPP]),
        descriptor(ROBERTO_NAME, &[TELEOP_RAPP]),
        descriptor(MARVIN_NAME, &[EXAMPLE_RAPP]),
    ]);
    match result {
        Err(PoolError::DuplicateResource(identity)) => assert_eq!(identity.as_str(), MARVIN_NAME),
        other => panic!("Unexpected result {other:?}"),
    }
}

#[test]
fn test_exact_match_subset() {
    let pool = doubleton_pool();
    let request = CapabilityRequest::new(TELEOP_RAPP, ROBERTO_NAME);
    assert_eq!(pool.match_subset(&request), set_of(&[ROBERTO_NAME]));
    assert_eq!(pool.match_list(&[request]), vec![set_of(&[ROBERTO_NAME])]);
}

#[test]
fn test_wildcard_match_subset() {
    let pool = doubleton_pool();
    for pattern in [ANY_NAME, ANY_TURTLEBOT] {
        let request = CapabilityRequest::new(TELEOP_RAPP, pattern);
        assert_eq!(
            pool.match_subset(&request),
            set_of(&[MARVIN_NAME, ROBERTO_NAME])
        );
    }
}

#[test]
fn test_wildcard_match_subset_singleton() {
    let pool = singleton_pool();
    let subset = pool.match_subset(&CapabilityRequest::new(TELEOP_RAPP, ANY_NAME));
    assert!(!subset.contains(MARVIN_NAME));
    assert_eq!(subset, set_of(&[ROBERTO_NAME]));
}

#[test]
fn test_match_requires_capability() {
    let pool = pool_from(&[
        (MARVIN_NAME, &[TELEOP_RAPP]),
        (ROBERTO_NAME, &[EXAMPLE_RAPP]),
    ]);
    assert_eq!(
        pool.match_subset(&CapabilityRequest::new(EXAMPLE_RAPP, ANY_NAME)),
        set_of(&[ROBERTO_NAME])
    );
    assert!(
        pool.match_subset(&CapabilityRequest::new("rocon_apps/*", ANY_NAME))
            .is_empty()
    );
}

#[test]
fn test_match_skips_allocated() {
    let mut pool = doubleton_pool();
    pool.allocate(&batch(request_id(), &[(TELEOP_RAPP, MARVIN_NAME)]))
        .unwrap();
    assert_eq!(
        pool.match_subset(&CapabilityRequest::new(TELEOP_RAPP, ANY_NAME)),
        set_of(&[ROBERTO_NAME])
    );
    assert!(
        pool.match_subset(&CapabilityRequest::new(TELEOP_RAPP, MARVIN_NAME))
            .is_empty()
    );
}

#[test]
fn test_malformed_pattern_matches_nothing() {
    let pool = doubleton_pool();
    for pattern in [
        "",
        "turtlebot",
        "rocon:///linux/precise/ros/turtlebot/",
        "rocon:///linux//ros/turtlebot/marvin",
        "rocon:///linux/precise/ros/*",
    ] {
        assert!(
            pool.match_subset(&CapabilityRequest::new(TELEOP_RAPP, pattern))
                .is_empty(),
            "pattern {pattern:?} should not match"
        );
    }
}

#[test]
fn test_match_list_keeps_duplicates() {
    let pool = doubleton_pool();
    let request = CapabilityRequest::new(TELEOP_RAPP, ANY_NAME);
    let matches = pool.match_list(&[
        request.clone(),
        CapabilityRequest::new(TELEOP_RAPP, MARVIN_NAME),
        request,
    ]);
    assert_eq!(
        matches,
        vec![
            set_of(&[MARVIN_NAME, ROBERTO_NAME]),
            set_of(&[MARVIN_NAME]),
            set_of(&[MARVIN_NAME, ROBERTO_NAME]),
        ]
    );
}

#[test]
fn test_match_list_with_unsatisfiable_item() {
    let pool = singleton_pool();
    let matches = pool.match_list(&[
        CapabilityRequest::new(TELEOP_RAPP, MARVIN_NAME),
        CapabilityRequest::new(TELEOP_RAPP, ROBERTO_NAME),
    ]);
    assert_eq!(matches.len(), 2);
    assert!(matches[0].is_empty());
    assert_eq!(matches[1], set_of(&[ROBERTO_NAME]));
}

#[test]
fn test_known_resources() {
    let mut pool = doubleton_pool();
    let rq = request_id();
    pool.allocate(&batch(rq, &[(TELEOP_RAPP, ROBERTO_NAME)]))
        .unwrap();
    let known = pool.known_resources();
    assert_eq!(known.len(), 2);
    assert_eq!(known[0].identity.as_str(), MARVIN_NAME);
    assert_eq!(known[0].status, PlatformStatus::Available);
    assert_eq!(known[0].owner, None);
    assert_eq!(
        known[0].capabilities,
        vec![TELEOP_RAPP.to_string(), EXAMPLE_RAPP.to_string()]
    );
    assert_eq!(known[1].identity.as_str(), ROBERTO_NAME);
    assert_eq!(known[1].status, PlatformStatus::Allocated);
    assert_eq!(known[1].owner, Some(rq));
}

#[test]
fn test_display_pool() {
    let pool = pool_from(&[(ROBERTO_NAME, &[TELEOP_RAPP]), (MARVIN_NAME, &[TELEOP_RAPP])]);
    assert_eq!(
        pool.to_string(),
        format!("{MARVIN_NAME} AVAILABLE [{TELEOP_RAPP}]\n{ROBERTO_NAME} AVAILABLE [{TELEOP_RAPP}]\n")
    );
}
