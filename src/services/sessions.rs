use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument};
use uuid::Uuid;
use crate::domain::User;
use crate::error::SessionError;

/// Issues opaque auth tokens and resolves them back to user ids.
///
/// Tokens live in memory only. This is a placeholder session scheme, not an
/// authentication mechanism.
#[derive(Debug, Default)]
pub struct SessionService {
    tokens: Mutex<HashMap<String, i64>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub fn generate_auth_token(&self, user: &User) -> Result<String, SessionError> {
        if user.id == 0 {
            return Err(SessionError::InvalidUser);
        }
        let token = format!("token_{}", Uuid::new_v4().simple());

        let mut tokens = self.tokens.lock().map_err(|_| SessionError::Poisoned)?;
        tokens.insert(token.clone(), user.id);
        debug!("Auth token issued");
        Ok(token)
    }

    #[instrument(skip(self, token))]
    pub fn get_user_id_by_token(&self, token: &str) -> Result<i64, SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let tokens = self.tokens.lock().map_err(|_| SessionError::Poisoned)?;
        let user_id = tokens.get(token).copied();
        debug!(found = user_id.is_some(), "Auth token lookup");
        user_id.ok_or(SessionError::TokenNotFound)
    }
}
