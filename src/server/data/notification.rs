use chrono::{NaiveDateTime, Utc};
use entity::{
    message_template::MessageChannel,
    notification::{NotificationKind, NotificationStatus},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    /// Creates a new instance of [`NotificationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        appointment_id: i32,
        customer_id: i32,
        template_id: Option<i32>,
        kind: NotificationKind,
        channel: MessageChannel,
        body: &str,
        scheduled_at: NaiveDateTime,
    ) -> Result<entity::notification::Model, DbErr> {
        let notification = entity::notification::ActiveModel {
            appointment_id: ActiveValue::Set(appointment_id),
            customer_id: ActiveValue::Set(customer_id),
            template_id: ActiveValue::Set(template_id),
            kind: ActiveValue::Set(kind),
            channel: ActiveValue::Set(channel),
            status: ActiveValue::Set(NotificationStatus::Pending),
            body: ActiveValue::Set(body.to_string()),
            scheduled_at: ActiveValue::Set(scheduled_at),
            sent_at: ActiveValue::Set(None),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_appointment_id(
        &self,
        appointment_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::AppointmentId.eq(appointment_id))
            .order_by_desc(entity::notification::Column::ScheduledAt)
            .all(self.db)
            .await
    }

    /// Whether a reminder already exists for an appointment, regardless of
    /// delivery status. Guards against double-scheduling.
    pub async fn reminder_exists(&self, appointment_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Notification::find()
            .filter(entity::notification::Column::AppointmentId.eq(appointment_id))
            .filter(entity::notification::Column::Kind.eq(NotificationKind::Reminder))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Pending notifications whose scheduled time has passed.
    pub async fn get_pending_due(
        &self,
        now: NaiveDateTime,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::Status.eq(NotificationStatus::Pending))
            .filter(entity::notification::Column::ScheduledAt.lte(now))
            .order_by_asc(entity::notification::Column::ScheduledAt)
            .all(self.db)
            .await
    }

    pub async fn mark_sent(
        &self,
        notification: entity::notification::Model,
    ) -> Result<entity::notification::Model, DbErr> {
        let mut active: entity::notification::ActiveModel = notification.into();

        active.status = ActiveValue::Set(NotificationStatus::Sent);
        active.sent_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        active.error = ActiveValue::Set(None);

        active.update(self.db).await
    }

    pub async fn mark_failed(
        &self,
        notification: entity::notification::Model,
        error: &str,
    ) -> Result<entity::notification::Model, DbErr> {
        let mut active: entity::notification::ActiveModel = notification.into();

        active.status = ActiveValue::Set(NotificationStatus::Failed);
        active.error = ActiveValue::Set(Some(error.to_string()));

        active.update(self.db).await
    }
}
