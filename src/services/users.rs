use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use crate::actor_framework::StoreError;
use crate::domain::User;
use crate::error::UserError;
use crate::services::SessionService;
use crate::storage::UserStorage;

/// A freshly registered user and the token issued for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUp {
    pub user: User,
    pub token: String,
}

#[derive(Clone)]
pub struct UsersService {
    storage: Arc<dyn UserStorage>,
    sessions: Arc<SessionService>,
}

impl UsersService {
    pub fn new(storage: Arc<dyn UserStorage>, sessions: Arc<SessionService>) -> Self {
        Self { storage, sessions }
    }

    /// Stores the user and issues its auth token.
    ///
    /// If the token cannot be issued the stored user is removed again, so a
    /// successful sign-up always comes with a usable token.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn sign_up(&self, user: User) -> Result<SignUp, UserError> {
        let created = User::from_record(self.storage.create(user.to_record()).await.map_err(|e| {
            error!(error = %e, "User could not be stored");
            UserError::from(e)
        })?);

        let token = match self.sessions.generate_auth_token(&created) {
            Ok(token) => token,
            Err(e) => {
                error!(error = %e, user_id = created.id, "Token issuance failed, removing user");
                if let Err(cleanup) = self.storage.delete(created.id).await {
                    warn!(error = %cleanup, user_id = created.id, "Could not remove user after failed sign-up");
                }
                return Err(e.into());
            }
        };

        info!(user_id = created.id, "User signed up");
        Ok(SignUp { user: created, token })
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: i64) -> Result<User, UserError> {
        match self.storage.read(id).await {
            Ok(record) => Ok(User::from_record(record)),
            Err(StoreError::NotFound { .. }) => Err(UserError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolves a session token to the user it was issued for.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> Result<User, UserError> {
        let user_id = self.sessions.get_user_id_by_token(token)?;
        self.get_user_by_id(user_id).await
    }
}
