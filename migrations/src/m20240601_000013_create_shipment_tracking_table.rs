use sea_orm_migration::prelude::*;

use super::m20240601_000012_create_shipments_table::Shipments;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShipmentTracking::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShipmentTracking::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShipmentTracking::ShipmentId).uuid().not_null())
                    .col(
                        ColumnDef::new(ShipmentTracking::Location)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShipmentTracking::Status)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShipmentTracking::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShipmentTracking::Notes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipment_tracking_shipment_id")
                            .from(ShipmentTracking::Table, ShipmentTracking::ShipmentId)
                            .to(Shipments::Table, Shipments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shipment_tracking_shipment_timestamp")
                    .table(ShipmentTracking::Table)
                    .col(ShipmentTracking::ShipmentId)
                    .col(ShipmentTracking::Timestamp)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShipmentTracking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ShipmentTracking {
    Table,
    Id,
    ShipmentId,
    Location,
    Status,
    Timestamp,
    Notes,
}
