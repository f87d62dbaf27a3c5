use sea_orm_migration::prelude::*;

use super::m20240601_000005_create_products_table::Products;
use super::m20240601_000006_create_warehouses_table::Warehouses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inventory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inventory::ProductId).uuid().not_null())
                    .col(ColumnDef::new(Inventory::WarehouseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Inventory::Quantity)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Inventory::Quantity).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Inventory::LastRestockDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_product_id")
                            .from(Inventory::Table, Inventory::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_warehouse_id")
                            .from(Inventory::Table, Inventory::WarehouseId)
                            .to(Warehouses::Table, Warehouses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One stock row per product per warehouse
        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_product_warehouse")
                    .table(Inventory::Table)
                    .col(Inventory::ProductId)
                    .col(Inventory::WarehouseId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Inventory {
    Table,
    Id,
    ProductId,
    WarehouseId,
    Quantity,
    LastRestockDate,
}
