use crate::internal::common::ids::RequestId;
use crate::internal::pool::identity::PlatformIdentity;
use crate::internal::pool::release::GrantedRequest;
use crate::internal::pool::request::Assignment;
use crate::internal::tests::utils::*;

struct TestRequest {
    id: RequestId,
    allocations: Vec<Assignment>,
}

impl GrantedRequest for TestRequest {
    fn request_id(&self) -> RequestId {
        self.id
    }

    fn allocations(&self) -> &[Assignment] {
        &self.allocations
    }
}

#[test]
fn test_release_one_resource() {
    let mut pool = doubleton_pool();
    assert_available(&pool, ROBERTO_NAME);

    let rq = request_id();
    let alloc = pool
        .allocate(&batch(rq, &[(TELEOP_RAPP, ROBERTO_NAME)]))
        .unwrap();
    let request = TestRequest {
        id: rq,
        allocations: alloc,
    };
    assert_allocated(&pool, ROBERTO_NAME, rq);

    pool.release_request(&request);
    assert_available(&pool, ROBERTO_NAME);
    assert_available(&pool, MARVIN_NAME);
}

#[test]
fn test_release_one_resource_list() {
    let mut pool = doubleton_pool();
    let rq = request_id();
    let alloc = pool
        .allocate(&batch(rq, &[(TELEOP_RAPP, ROBERTO_NAME)]))
        .unwrap();
    assert_allocated(&pool, ROBERTO_NAME, rq);

    pool.release_assignments(&alloc);
    assert_available(&pool, ROBERTO_NAME);
}

#[test]
fn test_release_by_identities() {
    let mut pool = doubleton_pool();
    let rq = request_id();
    pool.allocate(&batch(rq, &[(TELEOP_RAPP, ANY_NAME), (TELEOP_RAPP, ANY_NAME)]))
        .unwrap();
    assert_allocated(&pool, MARVIN_NAME, rq);
    assert_allocated(&pool, ROBERTO_NAME, rq);

    pool.release_identities(&[identity(MARVIN_NAME)]);
    assert_available(&pool, MARVIN_NAME);
    assert_allocated(&pool, ROBERTO_NAME, rq);
}

#[test]
fn test_wildcard_round_trip() {
    let mut pool = doubleton_pool();
    let alloc = pool
        .allocate(&batch(request_id(), &[(TELEOP_RAPP, ANY_NAME)]))
        .unwrap();
    assert_eq!(alloc.len(), 1);
    pool.release_assignments(&alloc);
    assert_available(&pool, MARVIN_NAME);
    assert_available(&pool, ROBERTO_NAME);
    assert_eq!(pool.known_resources(), doubleton_pool().known_resources());
}

#[test]
fn test_release_is_idempotent() {
    let mut pool = doubleton_pool();
    let alloc = pool
        .allocate(&batch(request_id(), &[(TELEOP_RAPP, MARVIN_NAME)]))
        .unwrap();
    pool.release_assignments(&alloc);
    pool.release_assignments(&alloc);
    assert_available(&pool, MARVIN_NAME);

    // Never allocated at all
    pool.release_identities(&[identity(ROBERTO_NAME)]);
    assert_available(&pool, ROBERTO_NAME);
}

#[test]
fn test_release_unknown_identity() {
    let mut pool = singleton_pool();
    let zaphod = PlatformIdentity::parse("rocon:///linux/precise/ros/turtlebot/zaphod").unwrap();
    pool.release_identities(&[zaphod.clone()]);
    pool.release_assignments(&[Assignment::new(TELEOP_RAPP, zaphod)]);
    assert_eq!(pool.len(), 1);
    assert_available(&pool, ROBERTO_NAME);
}

#[test]
fn test_release_request_owned_by_other() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut pool = singleton_pool();
    let owner = RequestId::new_random();
    pool.allocate(&batch(owner, &[(TELEOP_RAPP, ROBERTO_NAME)]))
        .unwrap();

    let stale = TestRequest {
        id: RequestId::new_random(),
        allocations: vec![Assignment::new(TELEOP_RAPP, identity(ROBERTO_NAME))],
    };
    pool.release_request(&stale);
    assert_available(&pool, ROBERTO_NAME);
}

#[test]
fn test_released_platform_can_be_allocated_again() {
    let mut pool = singleton_pool();
    let rq1 = RequestId::new_random();
    let alloc = pool.allocate(&batch(rq1, &[(TELEOP_RAPP, ANY_NAME)])).unwrap();
    pool.release_assignments(&alloc);

    let rq2 = RequestId::new_random();
    pool.allocate(&batch(rq2, &[(TELEOP_RAPP, ANY_NAME)])).unwrap();
    assert_allocated(&pool, ROBERTO_NAME, rq2);
}
