/// Storage shape of a user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub orders: Vec<i64>,
    pub payments: Vec<i64>,
}
