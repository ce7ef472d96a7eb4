//! Migration to create trips table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trips::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trips::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trips::DriverCpf).string_len(11).not_null())
                    .col(
                        ColumnDef::new(Trips::HasLoad)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Trips::OriginLat).double().not_null())
                    .col(ColumnDef::new(Trips::OriginLong).double().not_null())
                    .col(ColumnDef::new(Trips::DestinationLat).double().not_null())
                    .col(ColumnDef::new(Trips::DestinationLong).double().not_null())
                    .col(ColumnDef::new(Trips::Vehicle).big_integer().not_null())
                    .col(
                        ColumnDef::new(Trips::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trips::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trips_driver_cpf")
                    .table(Trips::Table)
                    .col(Trips::DriverCpf)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trips_start_time")
                    .table(Trips::Table)
                    .col(Trips::StartTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trips::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Trips {
    Table,
    Id,
    DriverCpf,
    HasLoad,
    OriginLat,
    OriginLong,
    DestinationLat,
    DestinationLong,
    Vehicle,
    StartTime,
    EndTime,
}
