//! Mapping helpers from entity models to response DTOs.

use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::{
        appointment::AppointmentDto,
        customer::{CustomerDto, VehicleDto},
        invoice::{InvoiceDto, LineItemDto, PaymentDto},
        service::ServiceOperationDto,
        template::{MessageTemplateDto, NotificationDto},
    },
    server::{
        data::{
            appointment::AppointmentRepository, customer::CustomerRepository,
            invoice::InvoiceRepository, service_operation::ServiceOperationRepository,
            vehicle::VehicleRepository,
        },
        error::Error,
        service::{booking::allowed_transitions, invoice::InvoiceService},
        util::vehicle::vehicle_label,
    },
};

pub fn customer_dto(customer: &entity::customer::Model) -> CustomerDto {
    CustomerDto {
        id: customer.id,
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        email: customer.email.clone(),
        phone: customer.phone.clone(),
        created_at: customer.created_at,
    }
}

pub fn vehicle_dto(vehicle: &entity::vehicle::Model) -> VehicleDto {
    VehicleDto {
        id: vehicle.id,
        year: vehicle.year,
        make: vehicle.make.clone(),
        model: vehicle.model.clone(),
        label: vehicle_label(vehicle.year, &vehicle.make, &vehicle.model),
        license_plate: vehicle.license_plate.clone(),
        vin: vehicle.vin.clone(),
    }
}

pub fn template_dto(template: &entity::message_template::Model) -> MessageTemplateDto {
    MessageTemplateDto {
        id: template.id,
        name: template.name.clone(),
        channel: template.channel.to_value(),
        subject: template.subject.clone(),
        body: template.body.clone(),
        updated_at: template.updated_at,
    }
}

pub fn notification_dto(notification: &entity::notification::Model) -> NotificationDto {
    NotificationDto {
        id: notification.id,
        appointment_id: notification.appointment_id,
        customer_id: notification.customer_id,
        kind: notification.kind.to_value(),
        channel: notification.channel.to_value(),
        status: notification.status.to_value(),
        body: notification.body.clone(),
        scheduled_at: notification.scheduled_at,
        sent_at: notification.sent_at,
        error: notification.error.clone(),
    }
}

/// Assemble the full appointment DTO: customer name, vehicle, snapshot
/// service lines, and the allowed next statuses for the dashboard dropdown.
pub async fn appointment_dto(
    db: &DatabaseConnection,
    appointment: &entity::appointment::Model,
) -> Result<AppointmentDto, Error> {
    let customer_repository = CustomerRepository::new(db);
    let vehicle_repository = VehicleRepository::new(db);
    let appointment_repository = AppointmentRepository::new(db);
    let operation_repository = ServiceOperationRepository::new(db);

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

    let lines = appointment_repository.get_services(appointment.id).await?;
    let operation_ids: Vec<i32> = lines.iter().map(|l| l.service_operation_id).collect();
    let operations = operation_repository.find_by_ids(&operation_ids).await?;

    // Names come from the catalog; price and duration are the snapshots
    // taken at booking time.
    let services = lines
        .iter()
        .map(|line| {
            let operation = operations
                .iter()
                .find(|op| op.id == line.service_operation_id);

            ServiceOperationDto {
                id: line.service_operation_id,
                name: operation
                    .map(|op| op.name.clone())
                    .unwrap_or_else(|| format!("Service #{}", line.service_operation_id)),
                category: operation
                    .map(|op| op.category.clone())
                    .unwrap_or_default(),
                description: operation.and_then(|op| op.description.clone()),
                price_cents: line.price_cents,
                duration_minutes: line.duration_minutes,
            }
        })
        .collect();

    Ok(AppointmentDto {
        id: appointment.id,
        customer_id: customer.id,
        customer_name: format!("{} {}", customer.first_name, customer.last_name),
        vehicle: vehicle_dto(&vehicle),
        scheduled_at: appointment.scheduled_at,
        duration_minutes: appointment.duration_minutes,
        status: appointment.status.to_value(),
        allowed_transitions: allowed_transitions(&appointment.status)
            .iter()
            .map(|s| s.to_value())
            .collect(),
        service_address: appointment.service_address.clone(),
        emergency: appointment.emergency,
        services,
        notes: appointment.notes.clone(),
    })
}

/// Assemble the invoice DTO with line items, payments, and derived totals.
pub async fn invoice_dto(
    db: &DatabaseConnection,
    invoice: &entity::invoice::Model,
) -> Result<InvoiceDto, Error> {
    let invoice_repository = InvoiceRepository::new(db);
    let invoice_service = InvoiceService::new(db);

    let line_items = invoice_repository.get_line_items(invoice.id).await?;
    let payments = invoice_repository.get_payments(invoice.id).await?;
    let totals = invoice_service.totals(invoice.id).await?;

    Ok(InvoiceDto {
        id: invoice.id,
        appointment_id: invoice.appointment_id,
        customer_id: invoice.customer_id,
        status: invoice.status.to_value(),
        line_items: line_items
            .iter()
            .map(|item| LineItemDto {
                id: item.id,
                description: item.description.clone(),
                quantity: item.quantity,
                unit_price_cents: item.unit_price_cents,
            })
            .collect(),
        payments: payments
            .iter()
            .map(|payment| PaymentDto {
                id: payment.id,
                amount_cents: payment.amount_cents,
                method: payment.method.clone(),
                paid_at: payment.paid_at,
            })
            .collect(),
        subtotal_cents: totals.subtotal_cents,
        paid_cents: totals.paid_cents,
        balance_cents: totals.balance_cents,
        created_at: invoice.created_at,
    })
}
