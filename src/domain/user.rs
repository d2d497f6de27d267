use crate::user_actor::UserRecord;

/// Represents a registered user in the system.
///
/// The password is kept in plaintext; this type is not a credential store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub orders: Vec<i64>,
    pub payments: Vec<i64>,
}

/// Lightweight back-reference to a user, carried by payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserRef {
    pub id: i64,
}

impl User {
    /// Creates a new, not yet persisted user.
    ///
    /// # Notes
    /// The `id` is `0` and will be assigned by the user store on sign-up.
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: 0,
            username: username.into(),
            email: email.into(),
            password: password.into(),
            orders: Vec::new(),
            payments: Vec::new(),
        }
    }

    /// A user known only by id, as reconstructed from a storage record.
    pub fn with_id(id: i64) -> Self {
        Self { id, ..Self::default() }
    }

    pub fn reference(&self) -> UserRef {
        UserRef { id: self.id }
    }

    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            orders: self.orders.clone(),
            payments: self.payments.clone(),
        }
    }

    pub fn from_record(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            password: record.password,
            orders: record.orders,
            payments: record.payments,
        }
    }
}
