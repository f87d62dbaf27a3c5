use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Warehouses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Warehouses::Id)
                            .uuid()
                            .primary_key()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Warehouses::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Warehouses::Address).text().not_null())
                    .col(ColumnDef::new(Warehouses::City).string_len(50).not_null())
                    .col(ColumnDef::new(Warehouses::State).string_len(50).not_null())
                    .col(ColumnDef::new(Warehouses::ZipCode).string_len(10).not_null())
                    .col(ColumnDef::new(Warehouses::Country).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Warehouses::ContactPerson)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Warehouses::Phone).string_len(15).not_null())
                    .col(ColumnDef::new(Warehouses::Email).string_len(254).not_null())
                    .col(
                        ColumnDef::new(Warehouses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Warehouses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Warehouses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Warehouses {
    Table,
    Id,
    Name,
    Address,
    City,
    State,
    ZipCode,
    Country,
    ContactPerson,
    Phone,
    Email,
    CreatedAt,
    UpdatedAt,
}
