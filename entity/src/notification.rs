use sea_orm::entity::prelude::*;

use super::message_template::MessageChannel;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum NotificationStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "SENT")]
    Sent,
    #[sea_orm(string_value = "FAILED")]
    Failed,
}

/// Kind of notification, used to suppress duplicates (one reminder per
/// appointment) and to label the admin tracking view.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum NotificationKind {
    #[sea_orm(string_value = "CONFIRMATION")]
    Confirmation,
    #[sea_orm(string_value = "REMINDER")]
    Reminder,
    #[sea_orm(string_value = "STATUS_UPDATE")]
    StatusUpdate,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub appointment_id: i32,
    pub customer_id: i32,
    #[sea_orm(nullable)]
    pub template_id: Option<i32>,
    pub kind: NotificationKind,
    pub channel: MessageChannel,
    pub status: NotificationStatus,
    /// Rendered message body as it was (or will be) delivered.
    pub body: String,
    pub scheduled_at: DateTime,
    #[sea_orm(nullable)]
    pub sent_at: Option<DateTime>,
    #[sea_orm(nullable)]
    pub error: Option<String>,
    pub created_at: DateTime,
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
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::message_template::Entity",
        from = "Column::TemplateId",
        to = "super::message_template::Column::Id"
    )]
    MessageTemplate,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::message_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MessageTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
