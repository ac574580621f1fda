use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260312_000001_create_customer_table::Customer;

static IDX_VEHICLE_CUSTOMER_ID: &str = "idx_vehicle_customer_id";
static FK_VEHICLE_CUSTOMER_ID: &str = "fk_vehicle_customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(integer(Vehicle::CustomerId))
                    .col(small_integer(Vehicle::Year))
                    .col(string(Vehicle::Make))
                    .col(string(Vehicle::Model))
                    .col(string_null(Vehicle::LicensePlate))
                    .col(string_null(Vehicle::Vin))
                    .col(text_null(Vehicle::Notes))
                    .col(timestamp_null(Vehicle::ArchivedAt))
                    .col(timestamp(Vehicle::CreatedAt))
                    .col(timestamp(Vehicle::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VEHICLE_CUSTOMER_ID)
                    .table(Vehicle::Table)
                    .col(Vehicle::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEHICLE_CUSTOMER_ID)
                    .from_tbl(Vehicle::Table)
                    .from_col(Vehicle::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VEHICLE_CUSTOMER_ID)
                    .table(Vehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VEHICLE_CUSTOMER_ID)
                    .table(Vehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    CustomerId,
    Year,
    Make,
    Model,
    LicensePlate,
    Vin,
    Notes,
    ArchivedAt,
    CreatedAt,
    UpdatedAt,
}
