use crate::actor_framework::Entity;
use super::OrderRecord;

impl Entity for OrderRecord {
    type Id = i64;
    type CreateParams = OrderRecord;
    const KIND: &'static str = "order";

    fn id(&self) -> &i64 { &self.id }

    /// Orders normally arrive with a pre-assigned id through `Insert`;
    /// `Create` overrides whatever id the record carried.
    fn from_create_params(id: i64, params: OrderRecord) -> Self {
        Self { id, ..params }
    }
}
