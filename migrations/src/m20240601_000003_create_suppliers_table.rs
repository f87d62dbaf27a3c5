use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Suppliers::Id).uuid().primary_key().not_null())
                    .col(ColumnDef::new(Suppliers::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Suppliers::ContactPerson)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Suppliers::Email).string_len(254).not_null())
                    .col(ColumnDef::new(Suppliers::Phone).string_len(15).not_null())
                    .col(ColumnDef::new(Suppliers::Address).text().not_null())
                    .col(ColumnDef::new(Suppliers::City).string_len(50).not_null())
                    .col(ColumnDef::new(Suppliers::State).string_len(50).not_null())
                    .col(ColumnDef::new(Suppliers::ZipCode).string_len(10).not_null())
                    .col(ColumnDef::new(Suppliers::Country).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Suppliers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Suppliers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Suppliers {
    Table,
    Id,
    Name,
    ContactPerson,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    Country,
    CreatedAt,
    UpdatedAt,
}
