use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_operation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: String,
    #[sea_orm(nullable)]
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_minutes: i32,
    pub active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appointment_service::Entity")]
    AppointmentService,
}

impl Related<super::appointment_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppointmentService.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        super::appointment_service::Relation::Appointment.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::appointment_service::Relation::ServiceOperation.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
