use crate::actor_framework::Entity;
use super::PaymentRecord;

impl Entity for PaymentRecord {
    type Id = i64;
    type CreateParams = PaymentRecord;
    const KIND: &'static str = "payment";

    fn id(&self) -> &i64 { &self.id }

    fn from_create_params(id: i64, params: PaymentRecord) -> Self {
        Self { id, ..params }
    }
}
