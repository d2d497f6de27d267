macro_rules! impl_client_new {
    ($client_name:ident, $record:ty) => {
        impl $client_name {
            pub fn new(inner: crate::actor_framework::ResourceClient<$record>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_client_lookup {
    ($client_name:ident, $record:ty) => {
        impl $client_name {
            /// Fetches a record, turning a miss into `StoreError::NotFound`.
            #[tracing::instrument(skip(self))]
            async fn find(&self, id: i64) -> Result<$record, crate::actor_framework::StoreError> {
                tracing::debug!("Sending request");
                self.inner
                    .get(id)
                    .await?
                    .ok_or_else(|| crate::actor_framework::StoreError::not_found::<$record>(&id))
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $record:ty) => {
        impl_client_new!($client_name, $record);
        impl_client_lookup!($client_name, $record);
    };
}
