use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::supplier::{
    ActiveModel as SupplierActiveModel, Column, Entity as Supplier, Model as SupplierModel,
};
use crate::errors::SchemaResult;
use crate::repositories::{ensure_deleted, update_error, Repository};

use super::BaseRepository;

/// Repository for suppliers. Suppliers are not linked to any other table.
#[derive(Debug)]
pub struct SupplierRepository {
    base: BaseRepository,
}

impl SupplierRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, supplier: SupplierActiveModel) -> SchemaResult<SupplierModel> {
        Ok(supplier.insert(self.base.get_db()).await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> SchemaResult<Option<SupplierModel>> {
        Ok(Supplier::find_by_id(id).one(self.base.get_db()).await?)
    }

    /// Suppliers whose name, contact person or email contains `term`
    pub async fn search(&self, term: &str) -> SchemaResult<Vec<SupplierModel>> {
        Ok(Supplier::find()
            .filter(
                Condition::any()
                    .add(Column::Name.contains(term))
                    .add(Column::ContactPerson.contains(term))
                    .add(Column::Email.contains(term)),
            )
            .order_by_asc(Column::Name)
            .all(self.base.get_db())
            .await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        mut changes: SupplierActiveModel,
    ) -> SchemaResult<SupplierModel> {
        changes.id = ActiveValue::Unchanged(id);
        changes.created_at = ActiveValue::NotSet;
        changes
            .update(self.base.get_db())
            .await
            .map_err(|e| update_error("Supplier", id, e))
    }

    pub async fn delete(&self, id: Uuid) -> SchemaResult<()> {
        let result = Supplier::delete_by_id(id).exec(self.base.get_db()).await?;
        ensure_deleted(result.rows_affected, "Supplier", id)
    }
}

impl Repository for SupplierRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
