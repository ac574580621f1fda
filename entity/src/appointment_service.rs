use sea_orm::entity::prelude::*;

/// Join row linking an appointment to a catalog service, with the price
/// captured at booking time so later catalog edits don't rewrite history.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub appointment_id: i32,
    pub service_operation_id: i32,
    pub price_cents: i64,
    pub duration_minutes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::appointment::Entity",
        from = "Column::AppointmentId",
        to = "super::appointment::Column::Id"
    )]
    Appointment,
    #[sea_orm(
        belongs_to = "super::service_operation::Entity",
        from = "Column::ServiceOperationId",
        to = "super::service_operation::Column::Id"
    )]
    ServiceOperation,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl Related<super::service_operation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceOperation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
