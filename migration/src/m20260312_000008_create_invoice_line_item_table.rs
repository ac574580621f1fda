use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260312_000003_create_service_operation_table::ServiceOperation,
    m20260312_000007_create_invoice_table::Invoice,
};

static IDX_INVOICE_LINE_ITEM_INVOICE_ID: &str = "idx_invoice_line_item_invoice_id";
static FK_INVOICE_LINE_ITEM_INVOICE_ID: &str = "fk_invoice_line_item_invoice_id";
static FK_INVOICE_LINE_ITEM_OPERATION_ID: &str = "fk_invoice_line_item_operation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvoiceLineItem::Table)
                    .if_not_exists()
                    .col(pk_auto(InvoiceLineItem::Id))
                    .col(integer(InvoiceLineItem::InvoiceId))
                    .col(integer_null(InvoiceLineItem::ServiceOperationId))
                    .col(string(InvoiceLineItem::Description))
                    .col(integer(InvoiceLineItem::Quantity))
                    .col(big_integer(InvoiceLineItem::UnitPriceCents))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVOICE_LINE_ITEM_INVOICE_ID)
                    .table(InvoiceLineItem::Table)
                    .col(InvoiceLineItem::InvoiceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVOICE_LINE_ITEM_INVOICE_ID)
                    .from_tbl(InvoiceLineItem::Table)
                    .from_col(InvoiceLineItem::InvoiceId)
                    .to_tbl(Invoice::Table)
                    .to_col(Invoice::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVOICE_LINE_ITEM_OPERATION_ID)
                    .from_tbl(InvoiceLineItem::Table)
                    .from_col(InvoiceLineItem::ServiceOperationId)
                    .to_tbl(ServiceOperation::Table)
                    .to_col(ServiceOperation::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INVOICE_LINE_ITEM_OPERATION_ID)
                    .table(InvoiceLineItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INVOICE_LINE_ITEM_INVOICE_ID)
                    .table(InvoiceLineItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVOICE_LINE_ITEM_INVOICE_ID)
                    .table(InvoiceLineItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InvoiceLineItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InvoiceLineItem {
    Table,
    Id,
    InvoiceId,
    ServiceOperationId,
    Description,
    Quantity,
    UnitPriceCents,
}
