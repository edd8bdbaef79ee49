//! Database migrations for warehouse service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20261017_000001_create_warehouses::Migration)]
    }
}

mod m20261017_000001_create_warehouses {
    use super::*;

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
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Warehouses::Address).string().not_null())
                        .col(ColumnDef::new(Warehouses::Telephone).string().not_null())
                        .col(
                            ColumnDef::new(Warehouses::WarehouseCode)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Warehouses::MinimumCapacity)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Warehouses::MinimumTemperature)
                                .double()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Warehouses::LocalityId)
                                .big_integer()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_warehouses_locality_id")
                        .table(Warehouses::Table)
                        .col(Warehouses::LocalityId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Warehouses::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Warehouses {
        Table,
        Id,
        Address,
        Telephone,
        WarehouseCode,
        MinimumCapacity,
        MinimumTemperature,
        LocalityId,
    }
}
