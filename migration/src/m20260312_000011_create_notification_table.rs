use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260312_000001_create_customer_table::Customer,
    m20260312_000005_create_appointment_table::Appointment,
    m20260312_000010_create_message_template_table::MessageTemplate,
};

static IDX_NOTIFICATION_APPOINTMENT_ID: &str = "idx_notification_appointment_id";
static IDX_NOTIFICATION_STATUS: &str = "idx_notification_status";
static FK_NOTIFICATION_APPOINTMENT_ID: &str = "fk_notification_appointment_id";
static FK_NOTIFICATION_CUSTOMER_ID: &str = "fk_notification_customer_id";
static FK_NOTIFICATION_TEMPLATE_ID: &str = "fk_notification_template_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(integer(Notification::AppointmentId))
                    .col(integer(Notification::CustomerId))
                    .col(integer_null(Notification::TemplateId))
                    .col(string_len(Notification::Kind, 16))
                    .col(string_len(Notification::Channel, 8))
                    .col(string_len(Notification::Status, 8))
                    .col(text(Notification::Body))
                    .col(timestamp(Notification::ScheduledAt))
                    .col(timestamp_null(Notification::SentAt))
                    .col(text_null(Notification::Error))
                    .col(timestamp(Notification::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATION_APPOINTMENT_ID)
                    .table(Notification::Table)
                    .col(Notification::AppointmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATION_STATUS)
                    .table(Notification::Table)
                    .col(Notification::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTIFICATION_APPOINTMENT_ID)
                    .from_tbl(Notification::Table)
                    .from_col(Notification::AppointmentId)
                    .to_tbl(Appointment::Table)
                    .to_col(Appointment::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTIFICATION_CUSTOMER_ID)
                    .from_tbl(Notification::Table)
                    .from_col(Notification::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTIFICATION_TEMPLATE_ID)
                    .from_tbl(Notification::Table)
                    .from_col(Notification::TemplateId)
                    .to_tbl(MessageTemplate::Table)
                    .to_col(MessageTemplate::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NOTIFICATION_TEMPLATE_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NOTIFICATION_CUSTOMER_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NOTIFICATION_APPOINTMENT_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATION_STATUS)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATION_APPOINTMENT_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    AppointmentId,
    CustomerId,
    TemplateId,
    Kind,
    Channel,
    Status,
    Body,
    ScheduledAt,
    SentAt,
    Error,
    CreatedAt,
}
