use crate::actor_framework::Entity;
use super::UserRecord;

impl Entity for UserRecord {
    type Id = i64;
    type CreateParams = UserRecord;
    const KIND: &'static str = "user";

    fn id(&self) -> &i64 { &self.id }

    /// Creates a new user record from sign-up data.
    ///
    /// # Arguments
    /// * `id` - Identifier allocated by the store
    /// * `params` - The user as submitted; its own id is ignored
    fn from_create_params(id: i64, params: UserRecord) -> Self {
        Self { id, ..params }
    }
}
