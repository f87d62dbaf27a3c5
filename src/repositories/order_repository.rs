use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entities::order::{
    ActiveModel as OrderActiveModel, Column, Entity as Order, Model as OrderModel,
};
use crate::entities::order_item::{self, Entity as OrderItem, Model as OrderItemModel};
use crate::errors::{SchemaError, SchemaResult};
use crate::repositories::{ensure_deleted, update_error, Repository};

use super::BaseRepository;

/// Repository for order operations
#[derive(Debug)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new order
    pub async fn create(&self, order: OrderActiveModel) -> SchemaResult<OrderModel> {
        Ok(order.insert(self.base.get_db()).await?)
    }

    /// Add a line to an order
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        order_id: Uuid,
        product_id: Uuid,
        quantity: i32,
        unit_price: Decimal,
    ) -> SchemaResult<OrderItemModel> {
        let item = order_item::ActiveModel {
            order_id: Set(order_id),
            product_id: Set(product_id),
            quantity: Set(quantity),
            unit_price: Set(unit_price),
            ..Default::default()
        };
        Ok(item.insert(self.base.get_db()).await?)
    }

    /// Find an order by ID
    pub async fn find_by_id(&self, id: Uuid) -> SchemaResult<Option<OrderModel>> {
        Ok(Order::find_by_id(id).one(self.base.get_db()).await?)
    }

    pub async fn find_by_number(&self, order_number: &str) -> SchemaResult<Option<OrderModel>> {
        Ok(Order::find()
            .filter(Column::OrderNumber.eq(order_number))
            .one(self.base.get_db())
            .await?)
    }

    /// Get all orders with pagination; `page` starts at 1
    pub async fn find_all(
        &self,
        page: u64,
        page_size: u64,
    ) -> SchemaResult<(Vec<OrderModel>, u64)> {
        if page == 0 || page_size == 0 {
            return Err(SchemaError::InvalidInput(format!(
                "page and page_size must be at least 1, got page={} page_size={}",
                page, page_size
            )));
        }

        let paginator = Order::find()
            .order_by_desc(Column::OrderDate)
            .paginate(self.base.get_db(), page_size);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page - 1).await?;

        Ok((orders, total))
    }

    /// Get order items for an order
    pub async fn items(&self, order_id: Uuid) -> SchemaResult<Vec<OrderItemModel>> {
        let order = self
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| SchemaError::not_found("Order", order_id))?;

        Ok(order
            .find_related(OrderItem)
            .order_by_asc(order_item::Column::Id)
            .all(self.base.get_db())
            .await?)
    }

    /// Sum of the line totals of an order
    pub async fn items_total(&self, order_id: Uuid) -> SchemaResult<Decimal> {
        let items = self.items(order_id).await?;
        Ok(items.iter().map(OrderItemModel::total_price).sum())
    }

    /// Overwrite the status. No transition rules apply.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: Uuid, status: &str) -> SchemaResult<OrderModel> {
        let order = OrderActiveModel {
            id: sea_orm::ActiveValue::Unchanged(id),
            status: Set(status.to_string()),
            ..Default::default()
        };
        let updated = order
            .update(self.base.get_db())
            .await
            .map_err(|e| update_error("Order", id, e))?;
        info!(order_id = %id, status, "order status updated");
        Ok(updated)
    }

    /// Number of orders per stored status value
    pub async fn status_counts(&self) -> SchemaResult<BTreeMap<String, i64>> {
        let rows = Order::find()
            .select_only()
            .column(Column::Status)
            .column_as(Expr::col(Column::Id).count(), "count")
            .group_by(Column::Status)
            .into_tuple::<(String, i64)>()
            .all(self.base.get_db())
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// The newest `limit` orders
    pub async fn recent(&self, limit: u64) -> SchemaResult<Vec<OrderModel>> {
        Ok(Order::find()
            .order_by_desc(Column::OrderDate)
            .limit(limit)
            .all(self.base.get_db())
            .await?)
    }

    /// Delete an order; its items and shipments are removed with it
    pub async fn delete(&self, id: Uuid) -> SchemaResult<()> {
        let result = Order::delete_by_id(id).exec(self.base.get_db()).await?;
        ensure_deleted(result.rows_affected, "Order", id)
    }
}

impl Repository for OrderRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}
