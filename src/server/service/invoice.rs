use entity::invoice::InvoiceStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        appointment::AppointmentRepository, invoice::InvoiceRepository,
        service_operation::ServiceOperationRepository,
    },
    error::{booking::BookingError, Error},
};

/// Totals derived from an invoice's line items and payments.
pub struct InvoiceTotals {
    pub subtotal_cents: i64,
    pub paid_cents: i64,
    pub balance_cents: i64,
}

pub struct InvoiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceService<'a> {
    /// Creates a new instance of [`InvoiceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generate an invoice from an appointment's service lines.
    ///
    /// Idempotent: re-posting for an appointment that already has an invoice
    /// returns the existing invoice instead of duplicating it.
    pub async fn generate_for_appointment(
        &self,
        appointment_id: i32,
    ) -> Result<entity::invoice::Model, Error> {
        let appointment_repository = AppointmentRepository::new(self.db);
        let invoice_repository = InvoiceRepository::new(self.db);
        let operation_repository = ServiceOperationRepository::new(self.db);

        let appointment = appointment_repository
            .find_by_id(appointment_id)
            .await?
            .ok_or(BookingError::AppointmentNotFound(appointment_id))?;

        if let Some(existing) = invoice_repository
            .find_by_appointment_id(appointment_id)
            .await?
        {
            return Ok(existing);
        }

        let invoice = invoice_repository
            .create(appointment.id, appointment.customer_id, InvoiceStatus::Issued)
            .await?;

        let lines = appointment_repository.get_services(appointment_id).await?;
        for line in lines {
            // Line description comes from the catalog name; the price is the
            // snapshot taken at booking time.
            let description = match operation_repository
                .find_by_id(line.service_operation_id)
                .await?
            {
                Some(operation) => operation.name,
                None => format!("Service #{}", line.service_operation_id),
            };

            invoice_repository
                .add_line_item(
                    invoice.id,
                    Some(line.service_operation_id),
                    &description,
                    1,
                    line.price_cents,
                )
                .await?;
        }

        Ok(invoice)
    }

    pub async fn totals(&self, invoice_id: i32) -> Result<InvoiceTotals, Error> {
        let invoice_repository = InvoiceRepository::new(self.db);

        let line_items = invoice_repository.get_line_items(invoice_id).await?;
        let payments = invoice_repository.get_payments(invoice_id).await?;

        let subtotal_cents: i64 = line_items
            .iter()
            .map(|item| item.quantity as i64 * item.unit_price_cents)
            .sum();
        let paid_cents: i64 = payments.iter().map(|p| p.amount_cents).sum();

        Ok(InvoiceTotals {
            subtotal_cents,
            paid_cents,
            balance_cents: subtotal_cents - paid_cents,
        })
    }

    /// Record a payment against an invoice.
    ///
    /// Void invoices accept no payments; an invoice whose balance reaches
    /// zero transitions to `Paid` automatically.
    pub async fn record_payment(
        &self,
        invoice_id: i32,
        amount_cents: i64,
        method: &str,
    ) -> Result<entity::invoice::Model, Error> {
        let invoice_repository = InvoiceRepository::new(self.db);

        let invoice = invoice_repository
            .find_by_id(invoice_id)
            .await?
            .ok_or(BookingError::InvoiceNotFound(invoice_id))?;

        if invoice.status == InvoiceStatus::Void {
            return Err(BookingError::InvoiceVoid(invoice_id).into());
        }

        invoice_repository
            .add_payment(invoice_id, amount_cents, method)
            .await?;

        let totals = self.totals(invoice_id).await?;
        if totals.balance_cents <= 0 && invoice.status != InvoiceStatus::Paid {
            return Ok(invoice_repository
                .update_status(invoice, InvoiceStatus::Paid)
                .await?);
        }

        Ok(invoice)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use curbside_test_utils::prelude::*;
    use entity::{appointment::AppointmentStatus, invoice::InvoiceStatus};

    use crate::server::{
        data::invoice::InvoiceRepository,
        error::{booking::BookingError, Error},
        service::invoice::InvoiceService,
    };

    async fn setup_appointment_with_services(
        test: &TestSetup,
    ) -> Result<entity::appointment::Model, TestError> {
        let customer = test
            .shop()
            .insert_customer("Rosa", "Delgado", "5558675309")
            .await?;
        let vehicle = test
            .shop()
            .insert_vehicle(customer.id, 2017, "Honda", "Civic")
            .await?;
        let appointment = test
            .shop()
            .insert_appointment(
                customer.id,
                vehicle.id,
                Utc::now().naive_utc(),
                75,
                AppointmentStatus::Completed,
            )
            .await?;

        let oil = test
            .shop()
            .insert_service_operation("Oil change", 8900, 45)
            .await?;
        let brakes = test
            .shop()
            .insert_service_operation("Brake inspection", 4500, 30)
            .await?;

        test.shop()
            .insert_appointment_service(appointment.id, oil.id, 8900, 45)
            .await?;
        test.shop()
            .insert_appointment_service(appointment.id, brakes.id, 4500, 30)
            .await?;

        Ok(appointment)
    }

    #[tokio::test]
    /// Expect generated invoice lines to mirror the appointment services
    async fn test_generate_invoice() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let invoice_service = InvoiceService::new(&test.state.db);
        let invoice_repository = InvoiceRepository::new(&test.state.db);
        let appointment = setup_appointment_with_services(&test).await?;

        let invoice = invoice_service
            .generate_for_appointment(appointment.id)
            .await
            .unwrap();

        assert_eq!(invoice.status, InvoiceStatus::Issued);

        let items = invoice_repository.get_line_items(invoice.id).await?;
        assert_eq!(items.len(), 2);

        let totals = invoice_service.totals(invoice.id).await.unwrap();
        assert_eq!(totals.subtotal_cents, 13400);
        assert_eq!(totals.balance_cents, 13400);

        Ok(())
    }

    #[tokio::test]
    /// Expect repeated generation to return the same invoice
    async fn test_generate_invoice_idempotent() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let invoice_service = InvoiceService::new(&test.state.db);
        let appointment = setup_appointment_with_services(&test).await?;

        let first = invoice_service
            .generate_for_appointment(appointment.id)
            .await
            .unwrap();
        let second = invoice_service
            .generate_for_appointment(appointment.id)
            .await
            .unwrap();

        assert_eq!(first.id, second.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect a full payment to flip the invoice to Paid
    async fn test_full_payment_marks_paid() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let invoice_service = InvoiceService::new(&test.state.db);
        let appointment = setup_appointment_with_services(&test).await?;

        let invoice = invoice_service
            .generate_for_appointment(appointment.id)
            .await
            .unwrap();

        let updated = invoice_service
            .record_payment(invoice.id, 13400, "card")
            .await
            .unwrap();

        assert_eq!(updated.status, InvoiceStatus::Paid);

        let totals = invoice_service.totals(invoice.id).await.unwrap();
        assert_eq!(totals.balance_cents, 0);

        Ok(())
    }

    #[tokio::test]
    /// Expect a partial payment to leave the invoice issued with a balance
    async fn test_partial_payment_keeps_balance() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let invoice_service = InvoiceService::new(&test.state.db);
        let appointment = setup_appointment_with_services(&test).await?;

        let invoice = invoice_service
            .generate_for_appointment(appointment.id)
            .await
            .unwrap();

        let updated = invoice_service
            .record_payment(invoice.id, 5000, "cash")
            .await
            .unwrap();

        assert_eq!(updated.status, InvoiceStatus::Issued);

        let totals = invoice_service.totals(invoice.id).await.unwrap();
        assert_eq!(totals.paid_cents, 5000);
        assert_eq!(totals.balance_cents, 8400);

        Ok(())
    }

    #[tokio::test]
    /// Expect void invoices to reject payments
    async fn test_void_invoice_rejects_payment() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let invoice_service = InvoiceService::new(&test.state.db);
        let appointment = setup_appointment_with_services(&test).await?;

        let invoice = test
            .shop()
            .insert_invoice(appointment.id, appointment.customer_id, InvoiceStatus::Void)
            .await?;

        let result = invoice_service.record_payment(invoice.id, 1000, "cash").await;

        assert!(matches!(
            result,
            Err(Error::BookingError(BookingError::InvoiceVoid(_)))
        ));

        Ok(())
    }
}
