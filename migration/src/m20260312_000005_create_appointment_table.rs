use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260312_000001_create_customer_table::Customer,
    m20260312_000002_create_vehicle_table::Vehicle,
};

static IDX_APPOINTMENT_CUSTOMER_ID: &str = "idx_appointment_customer_id";
static IDX_APPOINTMENT_SCHEDULED_AT: &str = "idx_appointment_scheduled_at";
static FK_APPOINTMENT_CUSTOMER_ID: &str = "fk_appointment_customer_id";
static FK_APPOINTMENT_VEHICLE_ID: &str = "fk_appointment_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::CustomerId))
                    .col(integer(Appointment::VehicleId))
                    .col(timestamp(Appointment::ScheduledAt))
                    .col(integer(Appointment::DurationMinutes))
                    .col(string_len(Appointment::Status, 16))
                    .col(string(Appointment::ServiceAddress))
                    .col(boolean(Appointment::Emergency))
                    .col(text_null(Appointment::Notes))
                    .col(timestamp(Appointment::CreatedAt))
                    .col(timestamp(Appointment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPOINTMENT_CUSTOMER_ID)
                    .table(Appointment::Table)
                    .col(Appointment::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPOINTMENT_SCHEDULED_AT)
                    .table(Appointment::Table)
                    .col(Appointment::ScheduledAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPOINTMENT_CUSTOMER_ID)
                    .from_tbl(Appointment::Table)
                    .from_col(Appointment::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPOINTMENT_VEHICLE_ID)
                    .from_tbl(Appointment::Table)
                    .from_col(Appointment::VehicleId)
                    .to_tbl(Vehicle::Table)
                    .to_col(Vehicle::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPOINTMENT_VEHICLE_ID)
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPOINTMENT_CUSTOMER_ID)
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPOINTMENT_SCHEDULED_AT)
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPOINTMENT_CUSTOMER_ID)
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    CustomerId,
    VehicleId,
    ScheduledAt,
    DurationMinutes,
    Status,
    ServiceAddress,
    Emergency,
    Notes,
    CreatedAt,
    UpdatedAt,
}
