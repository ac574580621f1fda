use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260312_000003_create_service_operation_table::ServiceOperation,
    m20260312_000005_create_appointment_table::Appointment,
};

static IDX_APPOINTMENT_SERVICE_APPOINTMENT_ID: &str = "idx_appointment_service_appointment_id";
static FK_APPOINTMENT_SERVICE_APPOINTMENT_ID: &str = "fk_appointment_service_appointment_id";
static FK_APPOINTMENT_SERVICE_OPERATION_ID: &str = "fk_appointment_service_operation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppointmentService::Table)
                    .if_not_exists()
                    .col(pk_auto(AppointmentService::Id))
                    .col(integer(AppointmentService::AppointmentId))
                    .col(integer(AppointmentService::ServiceOperationId))
                    .col(big_integer(AppointmentService::PriceCents))
                    .col(integer(AppointmentService::DurationMinutes))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPOINTMENT_SERVICE_APPOINTMENT_ID)
                    .table(AppointmentService::Table)
                    .col(AppointmentService::AppointmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPOINTMENT_SERVICE_APPOINTMENT_ID)
                    .from_tbl(AppointmentService::Table)
                    .from_col(AppointmentService::AppointmentId)
                    .to_tbl(Appointment::Table)
                    .to_col(Appointment::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPOINTMENT_SERVICE_OPERATION_ID)
                    .from_tbl(AppointmentService::Table)
                    .from_col(AppointmentService::ServiceOperationId)
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
                    .name(FK_APPOINTMENT_SERVICE_OPERATION_ID)
                    .table(AppointmentService::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPOINTMENT_SERVICE_APPOINTMENT_ID)
                    .table(AppointmentService::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPOINTMENT_SERVICE_APPOINTMENT_ID)
                    .table(AppointmentService::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppointmentService::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppointmentService {
    Table,
    Id,
    AppointmentId,
    ServiceOperationId,
    PriceCents,
    DurationMinutes,
}
