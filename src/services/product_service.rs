use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Select, Set,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    db::OrmConn,
    entity::products::{ActiveModel, Category, Column, Entity as Products},
    error::{AppError, AppResult},
    models::{DataValidationError, Product},
};

/// Insert `product` as a new row. On return `product` holds the stored row,
/// including the assigned id and the price as the store kept it.
pub async fn create(db: &OrmConn, product: &mut Product) -> AppResult<()> {
    tracing::info!(name = %product.name, "creating product");
    let active = ActiveModel {
        id: NotSet,
        name: Set(product.name.clone()),
        description: Set(product.description.clone()),
        price: Set(product.price),
        available: Set(product.available),
        category: Set(product.category),
    };
    let model = active.insert(db).await?;
    tracing::debug!(id = model.id, "product created");
    *product = Product::from(model);
    Ok(())
}

/// Overwrite the stored row for `product.id` with every field of `product`,
/// then refresh `product` from the updated row.
pub async fn update(db: &OrmConn, product: &mut Product) -> AppResult<()> {
    let id = product
        .id
        .ok_or_else(|| DataValidationError("Update called with empty ID field".into()))?;
    tracing::info!(id, name = %product.name, "updating product");
    let active = ActiveModel {
        id: Set(id),
        name: Set(product.name.clone()),
        description: Set(product.description.clone()),
        price: Set(product.price),
        available: Set(product.available),
        category: Set(product.category),
    };
    match active.update(db).await {
        Ok(model) => {
            *product = Product::from(model);
            Ok(())
        }
        Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound(format!(
            "Product with id '{id}' was not found."
        ))),
        Err(err) => Err(err.into()),
    }
}

/// Remove the row for `product.id`. Missing rows are ignored.
pub async fn delete(db: &OrmConn, product: &Product) -> AppResult<()> {
    let Some(id) = product.id else {
        return Ok(());
    };
    tracing::info!(id, name = %product.name, "deleting product");
    let result = Products::delete_by_id(id).exec(db).await?;
    tracing::debug!(id, rows = result.rows_affected, "product delete executed");
    Ok(())
}

pub async fn find(db: &OrmConn, id: i32) -> AppResult<Option<Product>> {
    tracing::debug!(id, "looking up product");
    let product = Products::find_by_id(id).one(db).await?.map(Product::from);
    Ok(product)
}

pub async fn find_by_name(db: &OrmConn, name: &str) -> AppResult<Vec<Product>> {
    tracing::debug!(name, "looking up products by name");
    fetch(db, Products::find().filter(Column::Name.eq(name))).await
}

pub async fn find_by_category(db: &OrmConn, category: Category) -> AppResult<Vec<Product>> {
    tracing::debug!(%category, "looking up products by category");
    fetch(db, Products::find().filter(Column::Category.eq(category))).await
}

pub async fn find_by_availability(db: &OrmConn, available: bool) -> AppResult<Vec<Product>> {
    tracing::debug!(available, "looking up products by availability");
    fetch(db, Products::find().filter(Column::Available.eq(available))).await
}

pub async fn all(db: &OrmConn) -> AppResult<Vec<Product>> {
    tracing::debug!("listing all products");
    fetch(db, Products::find()).await
}

async fn fetch(db: &OrmConn, finder: Select<Products>) -> AppResult<Vec<Product>> {
    let items = finder
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(items)
}
