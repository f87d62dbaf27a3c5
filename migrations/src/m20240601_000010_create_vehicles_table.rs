use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vehicles::Id).uuid().primary_key().not_null())
                    .col(
                        ColumnDef::new(Vehicles::VehicleNumber)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Vehicles::VehicleType).string_len(20).not_null())
                    .col(ColumnDef::new(Vehicles::Make).string_len(50).not_null())
                    .col(ColumnDef::new(Vehicles::Model).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Vehicles::Year)
                            .integer()
                            .not_null()
                            .check(Expr::col(Vehicles::Year).gte(0)),
                    )
                    .col(ColumnDef::new(Vehicles::LicensePlate).string_len(20).not_null())
                    .col(ColumnDef::new(Vehicles::Capacity).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Vehicles::Status)
                            .string_len(20)
                            .not_null()
                            .default("available"),
                    )
                    .col(
                        ColumnDef::new(Vehicles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehicles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicles {
    Table,
    Id,
    VehicleNumber,
    VehicleType,
    Make,
    Model,
    Year,
    LicensePlate,
    Capacity,
    Status,
    CreatedAt,
    UpdatedAt,
}
