use chrono::{Duration, NaiveDateTime, Utc};
use entity::appointment::AppointmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Upper bound on a single appointment's length, used to bound the candidate
/// window when scanning for overlaps.
pub const MAX_APPOINTMENT_MINUTES: i64 = 8 * 60;

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    /// Creates a new instance of [`AppointmentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        customer_id: i32,
        vehicle_id: i32,
        scheduled_at: NaiveDateTime,
        duration_minutes: i32,
        service_address: &str,
        emergency: bool,
        notes: Option<String>,
    ) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let appointment = entity::appointment::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            scheduled_at: ActiveValue::Set(scheduled_at),
            duration_minutes: ActiveValue::Set(duration_minutes),
            status: ActiveValue::Set(AppointmentStatus::Scheduled),
            service_address: ActiveValue::Set(service_address.to_string()),
            emergency: ActiveValue::Set(emergency),
            notes: ActiveValue::Set(notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        appointment.insert(self.db).await
    }

    /// Snapshot a service line onto an appointment.
    pub async fn add_service(
        &self,
        appointment_id: i32,
        service_operation_id: i32,
        price_cents: i64,
        duration_minutes: i32,
    ) -> Result<entity::appointment_service::Model, DbErr> {
        let line = entity::appointment_service::ActiveModel {
            appointment_id: ActiveValue::Set(appointment_id),
            service_operation_id: ActiveValue::Set(service_operation_id),
            price_cents: ActiveValue::Set(price_cents),
            duration_minutes: ActiveValue::Set(duration_minutes),
            ..Default::default()
        };

        line.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find_by_id(id).one(self.db).await
    }

    /// Service lines for one appointment.
    pub async fn get_services(
        &self,
        appointment_id: i32,
    ) -> Result<Vec<entity::appointment_service::Model>, DbErr> {
        entity::prelude::AppointmentService::find()
            .filter(entity::appointment_service::Column::AppointmentId.eq(appointment_id))
            .all(self.db)
            .await
    }

    /// Appointments that could overlap a `[start, start+duration)` window.
    ///
    /// Candidates are bounded by [`MAX_APPOINTMENT_MINUTES`] so the scan stays
    /// on the `scheduled_at` index; the caller does the exact interval check.
    /// Canceled and no-show appointments don't block a slot.
    pub async fn get_overlap_candidates(
        &self,
        start: NaiveDateTime,
        duration_minutes: i32,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        let window_start = start - Duration::minutes(MAX_APPOINTMENT_MINUTES);
        let window_end = start + Duration::minutes(duration_minutes as i64);

        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ScheduledAt.gte(window_start))
            .filter(entity::appointment::Column::ScheduledAt.lt(window_end))
            .filter(entity::appointment::Column::Status.is_not_in([
                AppointmentStatus::Canceled,
                AppointmentStatus::NoShow,
            ]))
            .all(self.db)
            .await
    }

    /// All appointments scheduled within `[from, to)`, earliest first.
    pub async fn get_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ScheduledAt.gte(from))
            .filter(entity::appointment::Column::ScheduledAt.lt(to))
            .order_by_asc(entity::appointment::Column::ScheduledAt)
            .all(self.db)
            .await
    }

    /// Scheduled appointments within `[from, to)`; the reminder scheduler's
    /// candidate set.
    pub async fn get_scheduled_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ScheduledAt.gte(from))
            .filter(entity::appointment::Column::ScheduledAt.lt(to))
            .filter(entity::appointment::Column::Status.eq(AppointmentStatus::Scheduled))
            .order_by_asc(entity::appointment::Column::ScheduledAt)
            .all(self.db)
            .await
    }

    /// Service lines for a set of appointments, for reporting.
    pub async fn get_services_for_appointments(
        &self,
        appointment_ids: &[i32],
    ) -> Result<Vec<entity::appointment_service::Model>, DbErr> {
        entity::prelude::AppointmentService::find()
            .filter(
                entity::appointment_service::Column::AppointmentId
                    .is_in(appointment_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        appointment: entity::appointment::Model,
        status: AppointmentStatus,
    ) -> Result<entity::appointment::Model, DbErr> {
        let mut active: entity::appointment::ActiveModel = appointment.into();

        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }
}
