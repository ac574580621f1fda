use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MessageTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(MessageTemplate::Id))
                    .col(string_uniq(MessageTemplate::Name))
                    .col(string_len(MessageTemplate::Channel, 8))
                    .col(string_null(MessageTemplate::Subject))
                    .col(text(MessageTemplate::Body))
                    .col(timestamp(MessageTemplate::CreatedAt))
                    .col(timestamp(MessageTemplate::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MessageTemplate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MessageTemplate {
    Table,
    Id,
    Name,
    Channel,
    Subject,
    Body,
    CreatedAt,
    UpdatedAt,
}
