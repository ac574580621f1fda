use chrono::Utc;
use dioxus_logger::tracing;
use entity::{
    message_template::MessageChannel,
    notification::{NotificationKind, NotificationStatus},
};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{notification::NotificationRepository, template::TemplateRepository},
    error::Error,
    service::template::{appointment_context, render},
};

/// Template names the notification pipeline looks up before falling back to
/// a built-in body. Shops customize these rows from the dashboard.
pub const CONFIRMATION_TEMPLATE: &str = "booking_confirmation";
pub const REMINDER_TEMPLATE: &str = "appointment_reminder";

const DEFAULT_CONFIRMATION_BODY: &str =
    "Hi {first_name}, your appointment for {vehicle} is booked for {appointment_date} at {appointment_time}. We come to you at {service_address}.";
const DEFAULT_REMINDER_BODY: &str =
    "Hi {first_name}, a reminder that your {vehicle} is scheduled for service on {appointment_date} at {appointment_time}.";

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Render and record the booking confirmation as a pending notification;
    /// the worker delivers it on its next pass.
    pub async fn record_confirmation(
        &self,
        appointment: &entity::appointment::Model,
        customer: &entity::customer::Model,
        vehicle: &entity::vehicle::Model,
    ) -> Result<entity::notification::Model, Error> {
        self.record(
            appointment,
            customer,
            vehicle,
            NotificationKind::Confirmation,
            CONFIRMATION_TEMPLATE,
            DEFAULT_CONFIRMATION_BODY,
        )
        .await
    }

    /// Record the reminder for an appointment entering the lead window.
    ///
    /// Returns `None` without writing anything when a reminder already exists
    /// for the appointment, so the scheduler can run repeatedly without
    /// double-sending.
    pub async fn record_reminder(
        &self,
        appointment: &entity::appointment::Model,
        customer: &entity::customer::Model,
        vehicle: &entity::vehicle::Model,
    ) -> Result<Option<entity::notification::Model>, Error> {
        let notification_repository = NotificationRepository::new(self.db);

        if notification_repository
            .reminder_exists(appointment.id)
            .await?
        {
            return Ok(None);
        }

        let notification = self
            .record(
                appointment,
                customer,
                vehicle,
                NotificationKind::Reminder,
                REMINDER_TEMPLATE,
                DEFAULT_REMINDER_BODY,
            )
            .await?;

        Ok(Some(notification))
    }

    async fn record(
        &self,
        appointment: &entity::appointment::Model,
        customer: &entity::customer::Model,
        vehicle: &entity::vehicle::Model,
        kind: NotificationKind,
        template_name: &str,
        default_body: &str,
    ) -> Result<entity::notification::Model, Error> {
        let notification_repository = NotificationRepository::new(self.db);
        let template_repository = TemplateRepository::new(self.db);

        let template = template_repository.find_by_name(template_name).await?;
        let (template_id, channel, body) = match &template {
            Some(t) => (Some(t.id), t.channel.clone(), t.body.clone()),
            None => (None, MessageChannel::Sms, default_body.to_string()),
        };

        let context = appointment_context(appointment, customer, vehicle);
        let rendered = render(&body, &context);

        let notification = notification_repository
            .create(
                appointment.id,
                customer.id,
                template_id,
                kind,
                channel,
                &rendered,
                Utc::now().naive_utc(),
            )
            .await?;

        Ok(notification)
    }

    /// Deliver a pending notification and mark the outcome.
    ///
    /// No SMS/email provider is wired in; delivery is the log line, which
    /// keeps the admin tracking view truthful about what went out and when.
    pub async fn dispatch(&self, notification_id: i32) -> Result<(), Error> {
        let notification_repository = NotificationRepository::new(self.db);

        let notification = match notification_repository.find_by_id(notification_id).await? {
            Some(notification) => notification,
            None => {
                tracing::warn!(
                    "Notification {} no longer exists, skipping dispatch",
                    notification_id
                );
                return Ok(());
            }
        };

        if notification.status != NotificationStatus::Pending {
            tracing::debug!(
                "Notification {} is {}, skipping dispatch",
                notification_id,
                notification.status.to_value()
            );
            return Ok(());
        }

        tracing::info!(
            "Delivering {} notification {} to customer {} via {}: {}",
            notification.kind.to_value(),
            notification.id,
            notification.customer_id,
            notification.channel.to_value(),
            notification.body
        );

        let _ = notification_repository.mark_sent(notification).await?;

        Ok(())
    }
}
