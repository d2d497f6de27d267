//! # Mock Framework
//!
//! Utilities for testing services in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_list`] to assert behavior.
//! Once the code under test has finished, `receiver.try_recv().is_err()`
//! proves no further store calls were made.

use std::sync::Mutex;
use tokio::sync::mpsc;
use crate::actor_framework::{Entity, Filter, ResourceClient, ResourceRequest, Response};
use crate::domain::Order;
use crate::error::AuthorizationError;
use crate::services::{Authorizer, OwnershipAuthorizer};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// We don't want to spin up a full `ResourceActor` when we are testing the
/// *service* logic (e.g., `OrdersService`).
///
/// Instead, we create a "Mock Client". This client sends messages to a channel we control (`receiver`).
/// We can then inspect the messages arriving on that channel and assert they are correct.
/// This allows us to simulate the store's behavior (success, failure, missing records) deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request.
///
/// The filter is handed back so the test can apply it to canned records.
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(Filter<T>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Authorizer that records every `(user_id, order_id)` it is asked about.
///
/// It either answers with a fixed verdict or defers to [`OwnershipAuthorizer`].
pub struct RecordingAuthorizer {
    verdict: Option<Result<bool, AuthorizationError>>,
    calls: Mutex<Vec<(i64, i64)>>,
}

impl RecordingAuthorizer {
    pub fn delegating() -> Self {
        Self { verdict: None, calls: Mutex::new(Vec::new()) }
    }

    pub fn returning(verdict: Result<bool, AuthorizationError>) -> Self {
        Self { verdict: Some(verdict), calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(i64, i64)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Authorizer for RecordingAuthorizer {
    fn is_authorized(&self, user_id: i64, order: &Order) -> Result<bool, AuthorizationError> {
        self.calls.lock().unwrap().push((user_id, order.id));
        match &self.verdict {
            Some(verdict) => verdict.clone(),
            None => OwnershipAuthorizer.is_authorized(user_id, order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::user_actor::UserRecord;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<UserRecord>(10);

        // Test Create
        let create_task = tokio::spawn(async move {
            let user = UserRecord { username: "Test".to_string(), email: "test@example.com".to_string(), ..UserRecord::default() };
            client.create(user).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.username, "Test");
        responder.send(Ok(UserRecord { id: 1, ..params })).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.map(|user| user.id), Ok(1));
    }

    #[test]
    fn test_recording_authorizer_counts_calls() {
        let authorizer = RecordingAuthorizer::delegating();
        let order = Order { id: 5, user: Some(User::with_id(1)), ..Order::default() };

        assert_eq!(authorizer.is_authorized(1, &order), Ok(true));
        assert_eq!(authorizer.is_authorized(2, &order), Ok(false));
        assert_eq!(authorizer.calls(), vec![(1, 5), (2, 5)]);
    }
}
