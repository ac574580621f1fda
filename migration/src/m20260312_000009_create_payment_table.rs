use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260312_000007_create_invoice_table::Invoice;

static IDX_PAYMENT_INVOICE_ID: &str = "idx_payment_invoice_id";
static FK_PAYMENT_INVOICE_ID: &str = "fk_payment_invoice_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::InvoiceId))
                    .col(big_integer(Payment::AmountCents))
                    .col(string(Payment::Method))
                    .col(timestamp(Payment::PaidAt))
                    .col(timestamp(Payment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAYMENT_INVOICE_ID)
                    .table(Payment::Table)
                    .col(Payment::InvoiceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_INVOICE_ID)
                    .from_tbl(Payment::Table)
                    .from_col(Payment::InvoiceId)
                    .to_tbl(Invoice::Table)
                    .to_col(Invoice::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PAYMENT_INVOICE_ID)
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PAYMENT_INVOICE_ID)
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    InvoiceId,
    AmountCents,
    Method,
    PaidAt,
    CreatedAt,
}
