use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    entity::products::Category,
    error::{AppError, AppResult},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<String>,
}

/// The single filter a listing request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    Name(String),
    Category(Category),
    Available(bool),
    All,
}

impl ProductQuery {
    /// Name wins over category, category over availability. Empty values are ignored.
    pub fn into_filter(self) -> AppResult<ProductFilter> {
        let non_empty = |value: Option<String>| value.filter(|s| !s.is_empty());

        if let Some(name) = non_empty(self.name) {
            return Ok(ProductFilter::Name(name));
        }
        if let Some(category) = non_empty(self.category) {
            let category = category
                .parse::<Category>()
                .map_err(|err| AppError::BadRequest(err.to_string()))?;
            return Ok(ProductFilter::Category(category));
        }
        if let Some(available) = non_empty(self.available) {
            // Anything other than "true" (any case) filters for unavailable products.
            return Ok(ProductFilter::Available(
                available.eq_ignore_ascii_case("true"),
            ));
        }
        Ok(ProductFilter::All)
    }
}
