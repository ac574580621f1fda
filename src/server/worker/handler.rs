use dioxus_logger::tracing;
use entity::appointment::AppointmentStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        appointment::AppointmentRepository, customer::CustomerRepository,
        notification::NotificationRepository, vehicle::VehicleRepository,
    },
    error::Error,
    model::worker::WorkerJob,
    service::notification::NotificationService,
};

/// Executes worker jobs popped from the queue.
///
/// Each job type has a corresponding method; [`WorkerJobHandler::handle`]
/// dispatches on the job variant. A job referencing a record that no longer
/// exists is a logged no-op rather than an error, because the queue may lag
/// behind dashboard deletions.
pub struct WorkerJobHandler {
    db: DatabaseConnection,
}

impl WorkerJobHandler {
    /// Create a new WorkerJobHandler
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Handle a worker job by delegating to the appropriate handler method.
    pub async fn handle(&self, job: &WorkerJob) -> Result<(), Error> {
        match job {
            WorkerJob::SendAppointmentReminder { appointment_id } => {
                self.send_appointment_reminder(*appointment_id).await
            }
            WorkerJob::DispatchNotification { notification_id } => {
                self.dispatch_notification(*notification_id).await
            }
        }
    }

    /// Record the reminder notification for an appointment entering the lead
    /// window. The dispatch cron delivers it on its next pass.
    pub async fn send_appointment_reminder(&self, appointment_id: i32) -> Result<(), Error> {
        tracing::debug!("Processing reminder for appointment {}", appointment_id);

        let appointment_repository = AppointmentRepository::new(&self.db);
        let customer_repository = CustomerRepository::new(&self.db);
        let vehicle_repository = VehicleRepository::new(&self.db);
        let notification_service = NotificationService::new(&self.db);

        let appointment = match appointment_repository.find_by_id(appointment_id).await? {
            Some(appointment) => appointment,
            None => {
                tracing::warn!(
                    "Appointment {} no longer exists, skipping reminder",
                    appointment_id
                );
                return Ok(());
            }
        };

        // Canceled or already-started work gets no reminder.
        if appointment.status != AppointmentStatus::Scheduled {
            tracing::debug!(
                "Appointment {} is no longer scheduled, skipping reminder",
                appointment_id
            );
            return Ok(());
        }

        let customer = customer_repository
            .find_by_id(appointment.customer_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Appointment {} references missing customer {}",
                    appointment.id, appointment.customer_id
                ))
            })?;
        let vehicle = vehicle_repository
            .find_by_id(appointment.vehicle_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Appointment {} references missing vehicle {}",
                    appointment.id, appointment.vehicle_id
                ))
            })?;

        match notification_service
            .record_reminder(&appointment, &customer, &vehicle)
            .await?
        {
            Some(notification) => {
                tracing::debug!(
                    "Recorded reminder notification {} for appointment {}",
                    notification.id,
                    appointment_id
                );
            }
            None => {
                tracing::debug!(
                    "Reminder already exists for appointment {}, skipping",
                    appointment_id
                );
            }
        }

        Ok(())
    }

    /// Deliver a pending notification, marking it failed when delivery
    /// errors so the admin tracking view reflects the outcome.
    pub async fn dispatch_notification(&self, notification_id: i32) -> Result<(), Error> {
        tracing::debug!("Dispatching notification {}", notification_id);

        let notification_service = NotificationService::new(&self.db);
        let notification_repository = NotificationRepository::new(&self.db);

        match notification_service.dispatch(notification_id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                if let Some(notification) =
                    notification_repository.find_by_id(notification_id).await?
                {
                    let _ = notification_repository
                        .mark_failed(notification, &e.to_string())
                        .await?;
                }

                tracing::error!(
                    "Failed to dispatch notification {}: {:?}",
                    notification_id,
                    e
                );

                Err(e)
            }
        }
    }
}
