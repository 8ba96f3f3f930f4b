/// One-shot asynchronous platform requests.
///
/// The platform answers reference-space and hit-test-source requests
/// some frames after they were issued. The frame loop never blocks on
/// them: it polls the `PendingRequest` once per frame. The platform side
/// holds the `Resolver` and answers exactly once.

use tokio::sync::oneshot::{self, error::TryRecvError};
use crate::error::{Error, Result};

/// Observed state of a pending request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestStatus<T> {
    /// No answer yet
    Pending,
    /// The platform delivered a value
    Resolved(T),
    /// The platform rejected the request, or the session ended first
    Rejected(Error),
}

/// Consumer half of a one-shot request
#[derive(Debug)]
pub struct PendingRequest<T> {
    receiver: oneshot::Receiver<Result<T>>,
}

/// Producer half of a one-shot request
///
/// Dropping a resolver without answering is observed by the consumer as
/// `Rejected(Error::SessionEnded)`.
#[derive(Debug)]
pub struct Resolver<T> {
    sender: oneshot::Sender<Result<T>>,
}

/// Create a connected resolver / pending request pair
pub fn pending_request<T>() -> (Resolver<T>, PendingRequest<T>) {
    let (sender, receiver) = oneshot::channel();
    (Resolver { sender }, PendingRequest { receiver })
}

impl<T> PendingRequest<T> {
    /// A request that is already rejected (platform refused synchronously)
    pub fn rejected(error: Error) -> Self {
        let (resolver, pending) = pending_request();
        resolver.reject(error);
        pending
    }

    /// A request that is already resolved
    pub fn resolved(value: T) -> Self {
        let (resolver, pending) = pending_request();
        resolver.resolve(value);
        pending
    }

    /// Non-blocking check for an answer.
    ///
    /// Once `Resolved` or `Rejected` has been returned the request is spent;
    /// polling again reports `Rejected(Error::SessionEnded)`.
    pub fn poll(&mut self) -> RequestStatus<T> {
        match self.receiver.try_recv() {
            Ok(Ok(value)) => RequestStatus::Resolved(value),
            Ok(Err(error)) => RequestStatus::Rejected(error),
            Err(TryRecvError::Empty) => RequestStatus::Pending,
            Err(TryRecvError::Closed) => RequestStatus::Rejected(Error::SessionEnded),
        }
    }
}

impl<T> Resolver<T> {
    /// Deliver the value. A consumer that is already gone is ignored.
    pub fn resolve(self, value: T) {
        let _ = self.sender.send(Ok(value));
    }

    /// Reject the request. A consumer that is already gone is ignored.
    pub fn reject(self, error: Error) {
        let _ = self.sender.send(Err(error));
    }
}

#[cfg(test)]
#[path = "pending_request_tests.rs"]
mod tests;
