use sea_orm_migration::{prelude::*, schema::*};

static IDX_SERVICE_OPERATION_CATEGORY: &str = "idx_service_operation_category";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceOperation::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceOperation::Id))
                    .col(string(ServiceOperation::Name))
                    .col(string(ServiceOperation::Category))
                    .col(text_null(ServiceOperation::Description))
                    .col(big_integer(ServiceOperation::PriceCents))
                    .col(integer(ServiceOperation::DurationMinutes))
                    .col(boolean(ServiceOperation::Active))
                    .col(timestamp(ServiceOperation::CreatedAt))
                    .col(timestamp(ServiceOperation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SERVICE_OPERATION_CATEGORY)
                    .table(ServiceOperation::Table)
                    .col(ServiceOperation::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SERVICE_OPERATION_CATEGORY)
                    .table(ServiceOperation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ServiceOperation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ServiceOperation {
    Table,
    Id,
    Name,
    Category,
    Description,
    PriceCents,
    DurationMinutes,
    Active,
    CreatedAt,
    UpdatedAt,
}
