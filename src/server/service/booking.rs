use chrono::{NaiveDate, NaiveDateTime};
use entity::appointment::AppointmentStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::appointment::{BookingRequestDto, QuickAddRequestDto},
    server::{
        data::{
            appointment::AppointmentRepository, customer::CustomerRepository,
            service_operation::ServiceOperationRepository, vehicle::VehicleRepository,
        },
        error::{booking::BookingError, Error},
        service::{customer::CustomerService, notification::NotificationService},
        util::time::{on_slot_grid, overlaps, slot_grid, within_business_hours, SLOT_MINUTES},
    },
};

/// Statuses an appointment may move to from its current one.
///
/// This table is the single source of truth for the lifecycle: the PATCH
/// endpoint enforces it and the dashboard dropdown is populated from it.
pub fn allowed_transitions(status: &AppointmentStatus) -> &'static [AppointmentStatus] {
    match status {
        AppointmentStatus::Scheduled => &[
            AppointmentStatus::InProgress,
            AppointmentStatus::Canceled,
            AppointmentStatus::NoShow,
        ],
        AppointmentStatus::InProgress => &[AppointmentStatus::Ready],
        AppointmentStatus::Ready => &[AppointmentStatus::Completed],
        AppointmentStatus::Completed
        | AppointmentStatus::Canceled
        | AppointmentStatus::NoShow => &[],
    }
}

/// Parse a status string from the API into the entity enum.
pub fn parse_status(value: &str) -> Result<AppointmentStatus, Error> {
    AppointmentStatus::try_from_value(&value.to_string())
        .map_err(|_| BookingError::InvalidStatus(value.to_string()).into())
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    /// Number of mobile techs; bounds concurrent appointments.
    tech_count: usize,
}

impl<'a> BookingService<'a> {
    /// Creates a new instance of [`BookingService`]
    pub fn new(db: &'a DatabaseConnection, tech_count: usize) -> Self {
        Self { db, tech_count }
    }

    /// Resolve requested catalog services, rejecting unknown or inactive IDs.
    ///
    /// Returns the service rows plus the summed duration used for conflict
    /// checking.
    async fn resolve_services(
        &self,
        service_ids: &[i32],
    ) -> Result<(Vec<entity::service_operation::Model>, i32), Error> {
        if service_ids.is_empty() {
            return Err(BookingError::NoServicesSelected.into());
        }

        let operation_repository = ServiceOperationRepository::new(self.db);
        let operations = operation_repository.find_by_ids(service_ids).await?;

        for id in service_ids {
            let found = operations.iter().find(|op| op.id == *id);
            match found {
                Some(op) if op.active => {}
                _ => return Err(BookingError::UnknownService(*id).into()),
            }
        }

        let duration: i32 = operations.iter().map(|op| op.duration_minutes).sum();

        Ok((operations, duration))
    }

    /// Reject a start time that is off the booking grid or that would collide
    /// with existing work beyond the tech capacity.
    ///
    /// Emergency calls skip the grid and business-hours checks but still go
    /// through conflict checking.
    pub async fn check_slot(
        &self,
        start: NaiveDateTime,
        duration_minutes: i32,
        emergency: bool,
    ) -> Result<(), Error> {
        if !emergency && (!on_slot_grid(start) || !within_business_hours(start, duration_minutes))
        {
            return Err(BookingError::OutsideBookingWindow.into());
        }

        let appointment_repository = AppointmentRepository::new(self.db);
        let candidates = appointment_repository
            .get_overlap_candidates(start, duration_minutes)
            .await?;

        let concurrent = candidates
            .iter()
            .filter(|a| overlaps(start, duration_minutes, a.scheduled_at, a.duration_minutes))
            .count();

        if concurrent >= self.tech_count {
            return Err(BookingError::SlotConflict(start).into());
        }

        Ok(())
    }

    /// Open/occupied state of every slot on a date's booking grid.
    pub async fn availability(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<(NaiveDateTime, bool)>, Error> {
        let appointment_repository = AppointmentRepository::new(self.db);

        let day_start = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::InternalError("invalid date".to_string()))?;
        let day_end = day_start + chrono::Duration::days(1);

        // One range query for the day; each grid slot is checked in memory.
        let appointments = appointment_repository
            .get_in_range(day_start, day_end)
            .await?;
        let blocking: Vec<_> = appointments
            .into_iter()
            .filter(|a| {
                a.status != AppointmentStatus::Canceled && a.status != AppointmentStatus::NoShow
            })
            .collect();

        let slots = slot_grid(date)
            .into_iter()
            .map(|slot| {
                let concurrent = blocking
                    .iter()
                    .filter(|a| {
                        overlaps(slot, SLOT_MINUTES as i32, a.scheduled_at, a.duration_minutes)
                    })
                    .count();

                (slot, concurrent < self.tech_count)
            })
            .collect();

        Ok(slots)
    }

    /// Public booking flow: match or create the customer and vehicle, check
    /// the slot, then create the appointment with its service lines and a
    /// pending confirmation notification.
    pub async fn create_booking(
        &self,
        request: &BookingRequestDto,
    ) -> Result<entity::appointment::Model, Error> {
        let customer_service = CustomerService::new(self.db);
        let vehicle_repository = VehicleRepository::new(self.db);

        let (operations, duration) = self.resolve_services(&request.service_ids).await?;
        self.check_slot(request.scheduled_at, duration, request.emergency)
            .await?;

        let customer = customer_service
            .get_or_create(
                &request.first_name,
                &request.last_name,
                request.email.clone(),
                &request.phone,
            )
            .await?;

        let vehicle = match vehicle_repository
            .find_by_customer_and_spec(
                customer.id,
                request.vehicle_year,
                &request.vehicle_make,
                &request.vehicle_model,
            )
            .await?
        {
            Some(vehicle) => vehicle,
            None => {
                vehicle_repository
                    .create(
                        customer.id,
                        request.vehicle_year,
                        request.vehicle_make.trim(),
                        request.vehicle_model.trim(),
                        None,
                        None,
                        None,
                    )
                    .await?
            }
        };

        self.create_appointment(
            &customer,
            &vehicle,
            request.scheduled_at,
            duration,
            &operations,
            &request.service_address,
            request.emergency,
            request.notes.clone(),
        )
        .await
    }

    /// Dashboard quick-add: resolve the customer from the lookup result or
    /// the inline fields, derive the vehicle the same way, then book.
    pub async fn quick_add(
        &self,
        request: &QuickAddRequestDto,
    ) -> Result<entity::appointment::Model, Error> {
        let customer_repository = CustomerRepository::new(self.db);
        let customer_service = CustomerService::new(self.db);
        let vehicle_repository = VehicleRepository::new(self.db);

        let (operations, duration) = self.resolve_services(&request.service_ids).await?;
        self.check_slot(request.scheduled_at, duration, request.emergency)
            .await?;

        let customer = match request.customer_id {
            Some(id) => customer_repository
                .find_by_id(id)
                .await?
                .ok_or(BookingError::CustomerNotFound(id))?,
            None => {
                let first_name = request
                    .first_name
                    .as_deref()
                    .ok_or(BookingError::IncompleteQuickAdd("first_name"))?;
                let last_name = request
                    .last_name
                    .as_deref()
                    .ok_or(BookingError::IncompleteQuickAdd("last_name"))?;

                customer_service
                    .get_or_create(first_name, last_name, None, &request.phone)
                    .await?
            }
        };

        let vehicle = match request.vehicle_id {
            Some(id) => {
                let vehicle = vehicle_repository
                    .find_by_id(id)
                    .await?
                    .ok_or(BookingError::VehicleNotFound(id))?;

                // A vehicle picked from the lookup must belong to the
                // resolved customer.
                if vehicle.customer_id != customer.id {
                    return Err(BookingError::VehicleNotFound(id).into());
                }

                vehicle
            }
            None => {
                let year = request
                    .vehicle_year
                    .ok_or(BookingError::IncompleteQuickAdd("vehicle_year"))?;
                let make = request
                    .vehicle_make
                    .as_deref()
                    .ok_or(BookingError::IncompleteQuickAdd("vehicle_make"))?;
                let model = request
                    .vehicle_model
                    .as_deref()
                    .ok_or(BookingError::IncompleteQuickAdd("vehicle_model"))?;

                match vehicle_repository
                    .find_by_customer_and_spec(customer.id, year, make, model)
                    .await?
                {
                    Some(vehicle) => vehicle,
                    None => {
                        vehicle_repository
                            .create(
                                customer.id,
                                year,
                                make.trim(),
                                model.trim(),
                                None,
                                None,
                                None,
                            )
                            .await?
                    }
                }
            }
        };

        self.create_appointment(
            &customer,
            &vehicle,
            request.scheduled_at,
            duration,
            &operations,
            &request.service_address,
            request.emergency,
            request.notes.clone(),
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn create_appointment(
        &self,
        customer: &entity::customer::Model,
        vehicle: &entity::vehicle::Model,
        scheduled_at: NaiveDateTime,
        duration: i32,
        operations: &[entity::service_operation::Model],
        service_address: &str,
        emergency: bool,
        notes: Option<String>,
    ) -> Result<entity::appointment::Model, Error> {
        let appointment_repository = AppointmentRepository::new(self.db);
        let notification_service = NotificationService::new(self.db);

        let appointment = appointment_repository
            .create(
                customer.id,
                vehicle.id,
                scheduled_at,
                duration,
                service_address,
                emergency,
                notes,
            )
            .await?;

        for operation in operations {
            appointment_repository
                .add_service(
                    appointment.id,
                    operation.id,
                    operation.price_cents,
                    operation.duration_minutes,
                )
                .await?;
        }

        let _ = notification_service
            .record_confirmation(&appointment, customer, vehicle)
            .await?;

        Ok(appointment)
    }

    /// Apply a guarded status transition.
    pub async fn transition_status(
        &self,
        appointment_id: i32,
        target: &str,
    ) -> Result<entity::appointment::Model, Error> {
        let appointment_repository = AppointmentRepository::new(self.db);

        let appointment = appointment_repository
            .find_by_id(appointment_id)
            .await?
            .ok_or(BookingError::AppointmentNotFound(appointment_id))?;

        let target_status = parse_status(target)?;

        if !allowed_transitions(&appointment.status).contains(&target_status) {
            return Err(BookingError::InvalidStatusTransition {
                from: appointment.status.to_value(),
                to: target_status.to_value(),
            }
            .into());
        }

        let updated = appointment_repository
            .update_status(appointment, target_status)
            .await?;

        Ok(updated)
    }
}
