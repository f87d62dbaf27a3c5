use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entities::category::{self, Entity as Category, Model as CategoryModel};
use crate::entities::product::{
    self, ActiveModel as ProductActiveModel, Entity as Product, Model as ProductModel,
};
use crate::errors::SchemaResult;
use crate::repositories::{ensure_deleted, update_error, Repository};

use super::BaseRepository;

/// Repository for categories and the products filed under them
#[derive(Debug)]
pub struct CatalogRepository {
    base: BaseRepository,
}

impl CatalogRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create_category(&self, name: &str, description: &str) -> SchemaResult<CategoryModel> {
        let category = category::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        };
        Ok(category.insert(self.base.get_db()).await?)
    }

    pub async fn list_categories(&self) -> SchemaResult<Vec<CategoryModel>> {
        Ok(Category::find()
            .order_by_asc(category::Column::Name)
            .all(self.base.get_db())
            .await?)
    }

    /// Delete a category; its products stay and lose the reference
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i32) -> SchemaResult<()> {
        let result = Category::delete_by_id(id).exec(self.base.get_db()).await?;
        ensure_deleted(result.rows_affected, "Category", id)?;
        info!(category_id = id, "category deleted");
        Ok(())
    }

    pub async fn create_product(&self, product: ProductActiveModel) -> SchemaResult<ProductModel> {
        Ok(product.insert(self.base.get_db()).await?)
    }

    pub async fn find_product(&self, id: Uuid) -> SchemaResult<Option<ProductModel>> {
        Ok(Product::find_by_id(id).one(self.base.get_db()).await?)
    }

    pub async fn find_by_sku(&self, sku: &str) -> SchemaResult<Option<ProductModel>> {
        Ok(Product::find()
            .filter(product::Column::Sku.eq(sku))
            .one(self.base.get_db())
            .await?)
    }

    pub async fn products_in_category(&self, category_id: i32) -> SchemaResult<Vec<ProductModel>> {
        Ok(Product::find()
            .filter(product::Column::CategoryId.eq(category_id))
            .order_by_asc(product::Column::Name)
            .all(self.base.get_db())
            .await?)
    }

    /// Products not filed under any category
    pub async fn uncategorized_products(&self) -> SchemaResult<Vec<ProductModel>> {
        Ok(Product::find()
            .filter(product::Column::CategoryId.is_null())
            .order_by_asc(product::Column::Name)
            .all(self.base.get_db())
            .await?)
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        mut changes: ProductActiveModel,
    ) -> SchemaResult<ProductModel> {
        changes.id = ActiveValue::Unchanged(id);
        changes.created_at = ActiveValue::NotSet;
        changes
            .update(self.base.get_db())
            .await
            .map_err(|e| update_error("Product", id, e))
    }

    /// Delete a product with its stock rows and order lines
    pub async fn delete_product(&self, id: Uuid) -> SchemaResult<()> {
        let result = Product::delete_by_id(id).exec(self.base.get_db()).await?;
        ensure_deleted(result.rows_affected, "Product", id)
    }
}

impl Repository for CatalogRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
