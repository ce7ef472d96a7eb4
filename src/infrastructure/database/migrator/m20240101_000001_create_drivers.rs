//! Migration to create drivers table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drivers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Drivers::Cpf)
                            .string_len(11)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Drivers::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Drivers::Gender).string_len(1).not_null())
                    .col(ColumnDef::new(Drivers::License).string_len(1).not_null())
                    .col(
                        ColumnDef::new(Drivers::BirthDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Drivers::HasVehicle)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_drivers_license")
                    .table(Drivers::Table)
                    .col(Drivers::License)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drivers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Drivers {
    Table,
    Cpf,
    Name,
    Gender,
    License,
    BirthDate,
    HasVehicle,
}
