use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{ProductId, Quantity};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub quantity: i64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::from_repository(self.id),
            self.name,
            self.code,
            self.description,
            Quantity::from_repository(self.quantity),
        )
    }
}
