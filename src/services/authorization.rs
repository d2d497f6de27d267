use tracing::{debug, instrument};
use crate::domain::Order;
use crate::error::AuthorizationError;

/// Decides whether a requesting user may act on an order.
pub trait Authorizer: Send + Sync {
    fn is_authorized(&self, user_id: i64, order: &Order) -> Result<bool, AuthorizationError>;
}

/// Grants access to the order's owner and nobody else.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipAuthorizer;

impl Authorizer for OwnershipAuthorizer {
    #[instrument(skip(self, order), fields(order_id = order.id))]
    fn is_authorized(&self, user_id: i64, order: &Order) -> Result<bool, AuthorizationError> {
        if user_id == 0 {
            return Err(AuthorizationError::UserIdRequired);
        }
        let owner_id = order.owner_id().ok_or(AuthorizationError::MissingOrderUser)?;
        debug!(owner_id, "Checking order ownership");
        Ok(owner_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;

    fn owned_by(owner: Option<i64>) -> Order {
        Order { id: 1, user: owner.map(User::with_id), ..Order::default() }
    }

    #[test]
    fn test_owner_is_authorized() {
        assert_eq!(OwnershipAuthorizer.is_authorized(1, &owned_by(Some(1))), Ok(true));
    }

    #[test]
    fn test_other_user_is_not_authorized() {
        assert_eq!(OwnershipAuthorizer.is_authorized(2, &owned_by(Some(1))), Ok(false));
    }

    #[test]
    fn test_zero_user_id_is_rejected() {
        assert_eq!(
            OwnershipAuthorizer.is_authorized(0, &owned_by(Some(1))),
            Err(AuthorizationError::UserIdRequired)
        );
    }

    #[test]
    fn test_order_without_owner_is_rejected() {
        assert_eq!(
            OwnershipAuthorizer.is_authorized(1, &owned_by(None)),
            Err(AuthorizationError::MissingOrderUser)
        );
    }
}
