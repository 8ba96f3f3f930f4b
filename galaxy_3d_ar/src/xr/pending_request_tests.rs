/// Tests for PendingRequest / Resolver

use super::*;

#[test]
fn test_new_request_is_pending() {
    let (_resolver, mut pending) = pending_request::<u32>();
    assert_eq!(pending.poll(), RequestStatus::Pending);
    assert_eq!(pending.poll(), RequestStatus::Pending);
}

#[test]
fn test_resolve_delivers_value_once() {
    let (resolver, mut pending) = pending_request::<u32>();
    resolver.resolve(7);
    assert_eq!(pending.poll(), RequestStatus::Resolved(7));
    // Spent: the resolver was consumed by resolve()
    assert_eq!(pending.poll(), RequestStatus::Rejected(Error::SessionEnded));
}

#[test]
fn test_reject_delivers_error() {
    let (resolver, mut pending) = pending_request::<u32>();
    resolver.reject(Error::Unsupported("hit-test".to_string()));
    assert_eq!(
        pending.poll(),
        RequestStatus::Rejected(Error::Unsupported("hit-test".to_string()))
    );
}

#[test]
fn test_dropped_resolver_is_session_ended() {
    let (resolver, mut pending) = pending_request::<u32>();
    drop(resolver);
    assert_eq!(pending.poll(), RequestStatus::Rejected(Error::SessionEnded));
}

#[test]
fn test_resolve_after_consumer_dropped_does_not_panic() {
    let (resolver, pending) = pending_request::<u32>();
    drop(pending);
    resolver.resolve(1);
}

#[test]
fn test_prebuilt_constructors() {
    assert_eq!(PendingRequest::resolved(3u8).poll(), RequestStatus::Resolved(3));
    assert_eq!(
        PendingRequest::<u8>::rejected(Error::SessionEnded).poll(),
        RequestStatus::Rejected(Error::SessionEnded)
    );
}

#[test]
fn test_answer_is_delivered_exactly_once() {
    let (resolver, mut pending) = pending_request::<u32>();
    assert_eq!(pending.poll(), RequestStatus::Pending);
    resolver.reject(Error::RequestRejected("busy".to_string()));

    assert_eq!(
        pending.poll(),
        RequestStatus::Rejected(Error::RequestRejected("busy".to_string()))
    );
    assert_eq!(pending.poll(), RequestStatus::Rejected(Error::SessionEnded));
}
