use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::entities::customer::{
    ActiveModel as CustomerActiveModel, Column, Entity as Customer, Model as CustomerModel,
};
use crate::entities::order::{self, Model as OrderModel};
use crate::errors::{SchemaError, SchemaResult};
use crate::repositories::{ensure_deleted, update_error, Repository};

use super::BaseRepository;

/// Repository for customer operations
#[derive(Debug)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new customer; the id is generated when left unset
    pub async fn create(&self, customer: CustomerActiveModel) -> SchemaResult<CustomerModel> {
        Ok(customer.insert(self.base.get_db()).await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> SchemaResult<Option<CustomerModel>> {
        Ok(Customer::find_by_id(id).one(self.base.get_db()).await?)
    }

    pub async fn find_by_email(&self, email: &str) -> SchemaResult<Option<CustomerModel>> {
        Ok(Customer::find()
            .filter(Column::Email.eq(email))
            .one(self.base.get_db())
            .await?)
    }

    /// Customers whose name or email contains `term`
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> SchemaResult<Vec<CustomerModel>> {
        Ok(Customer::find()
            .filter(
                Condition::any()
                    .add(Column::Name.contains(term))
                    .add(Column::Email.contains(term)),
            )
            .order_by_asc(Column::Name)
            .all(self.base.get_db())
            .await?)
    }

    /// Apply the set fields of `changes` to customer `id`.
    ///
    /// The id and creation time are never overwritten.
    pub async fn update(
        &self,
        id: Uuid,
        mut changes: CustomerActiveModel,
    ) -> SchemaResult<CustomerModel> {
        changes.id = ActiveValue::Unchanged(id);
        changes.created_at = ActiveValue::NotSet;
        changes
            .update(self.base.get_db())
            .await
            .map_err(|e| update_error("Customer", id, e))
    }

    /// Delete a customer together with its orders
    pub async fn delete(&self, id: Uuid) -> SchemaResult<()> {
        let result = Customer::delete_by_id(id).exec(self.base.get_db()).await?;
        ensure_deleted(result.rows_affected, "Customer", id)
    }

    /// Orders placed by a customer, newest first
    pub async fn orders_for_customer(&self, customer_id: Uuid) -> SchemaResult<Vec<OrderModel>> {
        let customer = self
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| SchemaError::not_found("Customer", customer_id))?;

        Ok(customer
            .find_related(order::Entity)
            .order_by_desc(order::Column::OrderDate)
            .all(self.base.get_db())
            .await?)
    }
}

impl Repository for CustomerRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
