use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::actor_framework::{ResourceClient, StoreError};
use crate::storage::UserStorage;
use crate::user_actor::UserRecord;

/// Client for the user store actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<UserRecord>,
}

impl_basic_client!(UserClient, UserRecord);

#[async_trait]
impl UserStorage for UserClient {
    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, user: UserRecord) -> Result<UserRecord, StoreError> {
        debug!("Sending request");
        self.inner.create(user).await
    }

    async fn read(&self, user_id: i64) -> Result<UserRecord, StoreError> {
        self.find(user_id).await
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn update(&self, user: UserRecord) -> Result<UserRecord, StoreError> {
        debug!("Sending request");
        self.inner.update(user).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: i64) -> Result<(), StoreError> {
        debug!("Sending request");
        self.inner.delete(user_id).await
    }
}
