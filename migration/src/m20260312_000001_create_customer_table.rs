use sea_orm_migration::{prelude::*, schema::*};

static IDX_CUSTOMER_PHONE_NORMALIZED: &str = "idx_customer_phone_normalized";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::Id))
                    .col(string(Customer::FirstName))
                    .col(string(Customer::LastName))
                    .col(string_null(Customer::Email))
                    .col(string(Customer::Phone))
                    .col(string_uniq(Customer::PhoneNormalized))
                    .col(timestamp_null(Customer::ArchivedAt))
                    .col(timestamp(Customer::CreatedAt))
                    .col(timestamp(Customer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CUSTOMER_PHONE_NORMALIZED)
                    .table(Customer::Table)
                    .col(Customer::PhoneNormalized)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CUSTOMER_PHONE_NORMALIZED)
                    .table(Customer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    PhoneNormalized,
    ArchivedAt,
    CreatedAt,
    UpdatedAt,
}
