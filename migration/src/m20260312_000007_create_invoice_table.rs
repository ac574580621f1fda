use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260312_000001_create_customer_table::Customer,
    m20260312_000005_create_appointment_table::Appointment,
};

static IDX_INVOICE_APPOINTMENT_ID: &str = "idx_invoice_appointment_id";
static FK_INVOICE_APPOINTMENT_ID: &str = "fk_invoice_appointment_id";
static FK_INVOICE_CUSTOMER_ID: &str = "fk_invoice_customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::Id))
                    .col(integer(Invoice::AppointmentId))
                    .col(integer(Invoice::CustomerId))
                    .col(string_len(Invoice::Status, 16))
                    .col(timestamp(Invoice::CreatedAt))
                    .col(timestamp(Invoice::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVOICE_APPOINTMENT_ID)
                    .table(Invoice::Table)
                    .col(Invoice::AppointmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVOICE_APPOINTMENT_ID)
                    .from_tbl(Invoice::Table)
                    .from_col(Invoice::AppointmentId)
                    .to_tbl(Appointment::Table)
                    .to_col(Appointment::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVOICE_CUSTOMER_ID)
                    .from_tbl(Invoice::Table)
                    .from_col(Invoice::CustomerId)
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
                    .name(FK_INVOICE_CUSTOMER_ID)
                    .table(Invoice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INVOICE_APPOINTMENT_ID)
                    .table(Invoice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVOICE_APPOINTMENT_ID)
                    .table(Invoice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Invoice {
    Table,
    Id,
    AppointmentId,
    CustomerId,
    Status,
    CreatedAt,
    UpdatedAt,
}
