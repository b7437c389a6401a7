use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

use crate::entity::products::{Category, Model as ProductModel};

/// Raised when a Product cannot be built from request data.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid product: {0}")]
pub struct DataValidationError(pub String);

/// In-memory Product. `id` is `None` until the store assigns one and is never
/// taken from client input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[serde(skip_deserializing)]
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[schema(example = "Hat")]
    pub name: String,
    #[schema(example = "A red fedora")]
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::str::serialize")]
    #[schema(value_type = String, example = "59.95")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl Product {
    /// Overwrite every field except `id` from a JSON mapping.
    pub fn from_json(&mut self, data: &Value) -> Result<(), DataValidationError> {
        if !data.is_object() {
            return Err(DataValidationError(
                "body of request contained bad or no data".into(),
            ));
        }
        let incoming: Product = serde_json::from_value(data.clone())
            .map_err(|err| DataValidationError(err.to_string()))?;

        *self = Product {
            id: self.id,
            ..incoming
        };
        Ok(())
    }
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            available: model.available,
            category: model.category,
        }
    }
}
