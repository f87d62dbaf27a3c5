use chrono::{DateTime, Utc};
use metrics::counter;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::entities::inventory::{self, Entity as Inventory, Model as InventoryModel};
use crate::entities::product::{self, Model as ProductModel};
use crate::entities::warehouse::{
    ActiveModel as WarehouseActiveModel, Entity as Warehouse, Model as WarehouseModel,
};
use crate::errors::{SchemaError, SchemaResult};
use crate::repositories::{ensure_deleted, Repository};

use super::BaseRepository;

/// Repository for warehouses and per-warehouse stock levels
#[derive(Debug)]
pub struct InventoryRepository {
    base: BaseRepository,
}

impl InventoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create_warehouse(
        &self,
        warehouse: WarehouseActiveModel,
    ) -> SchemaResult<WarehouseModel> {
        Ok(warehouse.insert(self.base.get_db()).await?)
    }

    pub async fn find_warehouse(&self, id: Uuid) -> SchemaResult<Option<WarehouseModel>> {
        Ok(Warehouse::find_by_id(id).one(self.base.get_db()).await?)
    }

    /// Delete a warehouse and every stock row it holds
    pub async fn delete_warehouse(&self, id: Uuid) -> SchemaResult<()> {
        let result = Warehouse::delete_by_id(id).exec(self.base.get_db()).await?;
        ensure_deleted(result.rows_affected, "Warehouse", id)
    }

    pub async fn find_stock(
        &self,
        product_id: Uuid,
        warehouse_id: Uuid,
    ) -> SchemaResult<Option<InventoryModel>> {
        Ok(stock_row(self.base.get_db(), product_id, warehouse_id).await?)
    }

    /// Set the absolute quantity of a product in a warehouse, creating the
    /// row on first use
    #[instrument(skip(self))]
    pub async fn set_stock(
        &self,
        product_id: Uuid,
        warehouse_id: Uuid,
        quantity: i32,
    ) -> SchemaResult<InventoryModel> {
        if quantity < 0 {
            return Err(SchemaError::InvalidInput(format!(
                "stock quantity must be non-negative, got {}",
                quantity
            )));
        }
        let db = self.base.get_db();
        match stock_row(db, product_id, warehouse_id).await? {
            Some(existing) => {
                let mut active: inventory::ActiveModel = existing.into();
                active.quantity = Set(quantity);
                Ok(active.update(db).await?)
            }
            None => Ok(inventory::ActiveModel {
                product_id: Set(product_id),
                warehouse_id: Set(warehouse_id),
                quantity: Set(quantity),
                ..Default::default()
            }
            .insert(db)
            .await?),
        }
    }

    /// Add received units and stamp the restock date
    #[instrument(skip(self))]
    pub async fn restock(
        &self,
        product_id: Uuid,
        warehouse_id: Uuid,
        received: i32,
    ) -> SchemaResult<InventoryModel> {
        if received <= 0 {
            return Err(SchemaError::InvalidInput(format!(
                "restock quantity must be positive, got {}",
                received
            )));
        }
        let db = self.base.get_db();
        let now = Utc::now();
        let row = match add_stock(db, product_id, warehouse_id, received, Some(now)).await? {
            Some(row) => row,
            None => {
                let first = inventory::ActiveModel {
                    product_id: Set(product_id),
                    warehouse_id: Set(warehouse_id),
                    quantity: Set(received),
                    last_restock_date: Set(Some(now)),
                    ..Default::default()
                };
                match first.insert(db).await.map_err(SchemaError::from_db) {
                    Ok(row) => row,
                    // another caller created the row first
                    Err(SchemaError::UniqueViolation(_)) => {
                        add_stock(db, product_id, warehouse_id, received, Some(now))
                            .await?
                            .ok_or_else(|| {
                                SchemaError::not_found(
                                    "Inventory",
                                    format!("{}/{}", product_id, warehouse_id),
                                )
                            })?
                    }
                    Err(e) => return Err(e),
                }
            }
        };
        counter!("logistics_inventory.restocks", 1);
        Ok(row)
    }

    /// Move units of a product between two warehouses in one transaction.
    ///
    /// Returns the source and destination rows after the move.
    #[instrument(skip(self))]
    pub async fn transfer(
        &self,
        product_id: Uuid,
        from_warehouse: Uuid,
        to_warehouse: Uuid,
        quantity: i32,
    ) -> SchemaResult<(InventoryModel, InventoryModel)> {
        if from_warehouse == to_warehouse {
            return Err(SchemaError::InvalidInput(
                "source and destination warehouse are the same".to_string(),
            ));
        }
        if quantity <= 0 {
            return Err(SchemaError::InvalidInput(format!(
                "transfer quantity must be positive, got {}",
                quantity
            )));
        }

        let txn = self.base.get_db().begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            SchemaError::from_db(e)
        })?;

        let moved = match move_stock(&txn, product_id, from_warehouse, to_warehouse, quantity).await
        {
            Ok(rows) => rows,
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    error!("Failed to rollback transaction: {}", rollback_err);
                }
                return Err(e);
            }
        };

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            SchemaError::from_db(e)
        })?;

        counter!("logistics_inventory.transfers", 1);
        info!(%product_id, %from_warehouse, %to_warehouse, quantity, "stock transferred");
        Ok(moved)
    }

    /// Stock rows of one product across all warehouses
    pub async fn stock_for_product(&self, product_id: Uuid) -> SchemaResult<Vec<InventoryModel>> {
        Ok(Inventory::find()
            .filter(inventory::Column::ProductId.eq(product_id))
            .order_by_asc(inventory::Column::Id)
            .all(self.base.get_db())
            .await?)
    }

    /// Total units of a product over every warehouse
    pub async fn total_stock(&self, product_id: Uuid) -> SchemaResult<i64> {
        let rows = self.stock_for_product(product_id).await?;
        Ok(rows.iter().map(|row| i64::from(row.quantity)).sum())
    }

    /// Stock rows at or below their product's reorder level
    pub async fn low_stock(&self) -> SchemaResult<Vec<(InventoryModel, ProductModel)>> {
        let rows = Inventory::find()
            .find_also_related(product::Entity)
            .order_by_asc(inventory::Column::Id)
            .all(self.base.get_db())
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(stock, product)| product.map(|product| (stock, product)))
            .filter(|(stock, product)| stock.needs_reorder(product))
            .collect())
    }
}

impl Repository for InventoryRepository {
    fn get_db(&self) -> &DatabaseConnection {
        self.base.get_db()
    }
}

async fn stock_row<C: ConnectionTrait>(
    conn: &C,
    product_id: Uuid,
    warehouse_id: Uuid,
) -> Result<Option<InventoryModel>, sea_orm::DbErr> {
    Inventory::find()
        .filter(inventory::Column::ProductId.eq(product_id))
        .filter(inventory::Column::WarehouseId.eq(warehouse_id))
        .one(conn)
        .await
}

/// Add `delta` units to an existing stock row in a single UPDATE, optionally
/// stamping the restock date.
///
/// Returns `Ok(None)` when the row does not exist yet. A sum that would not
/// fit in the column is rejected without touching the row.
async fn add_stock<C: ConnectionTrait>(
    conn: &C,
    product_id: Uuid,
    warehouse_id: Uuid,
    delta: i32,
    restocked_at: Option<DateTime<Utc>>,
) -> SchemaResult<Option<InventoryModel>> {
    let mut update = Inventory::update_many()
        .col_expr(
            inventory::Column::Quantity,
            Expr::col(inventory::Column::Quantity).add(delta),
        )
        .filter(inventory::Column::ProductId.eq(product_id))
        .filter(inventory::Column::WarehouseId.eq(warehouse_id))
        .filter(inventory::Column::Quantity.lte(i32::MAX - delta));
    if let Some(at) = restocked_at {
        update = update.col_expr(inventory::Column::LastRestockDate, Expr::value(at));
    }
    let result = update.exec(conn).await?;

    match stock_row(conn, product_id, warehouse_id).await? {
        Some(existing) if result.rows_affected == 0 => Err(SchemaError::InvalidInput(format!(
            "adding {} units to {} would overflow the stock quantity",
            delta, existing.quantity
        ))),
        row => Ok(row),
    }
}

async fn move_stock(
    txn: &DatabaseTransaction,
    product_id: Uuid,
    from_warehouse: Uuid,
    to_warehouse: Uuid,
    quantity: i32,
) -> SchemaResult<(InventoryModel, InventoryModel)> {
    let taken = Inventory::update_many()
        .col_expr(
            inventory::Column::Quantity,
            Expr::col(inventory::Column::Quantity).sub(quantity),
        )
        .filter(inventory::Column::ProductId.eq(product_id))
        .filter(inventory::Column::WarehouseId.eq(from_warehouse))
        .filter(inventory::Column::Quantity.gte(quantity))
        .exec(txn)
        .await?;

    if taken.rows_affected == 0 {
        return Err(match stock_row(txn, product_id, from_warehouse).await? {
            Some(source) => SchemaError::InvalidInput(format!(
                "cannot move {} units, only {} in stock",
                quantity, source.quantity
            )),
            None => SchemaError::InvalidInput(format!(
                "product {} is not stocked in warehouse {}",
                product_id, from_warehouse
            )),
        });
    }

    let destination = match add_stock(txn, product_id, to_warehouse, quantity, None).await? {
        Some(row) => row,
        None => {
            inventory::ActiveModel {
                product_id: Set(product_id),
                warehouse_id: Set(to_warehouse),
                quantity: Set(quantity),
                ..Default::default()
            }
            .insert(txn)
            .await?
        }
    };

    let source = stock_row(txn, product_id, from_warehouse)
        .await?
        .ok_or_else(|| {
            SchemaError::not_found("Inventory", format!("{}/{}", product_id, from_warehouse))
        })?;

    Ok((source, destination))
}
