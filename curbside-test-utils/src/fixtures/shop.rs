//! Insert helpers for shop records in the test database.
//!
//! Each helper inserts a row with standard test values and returns the stored
//! model, so tests only spell out the fields they actually assert on.

use chrono::NaiveDateTime;
use chrono::Utc;
use entity::{
    appointment::AppointmentStatus,
    invoice::InvoiceStatus,
    message_template::MessageChannel,
    notification::{NotificationKind, NotificationStatus},
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    error::TestError,
    model::{
        AdminAccountModel, AppointmentModel, AppointmentServiceModel, CustomerModel, InvoiceModel,
        InvoiceLineItemModel, MessageTemplateModel, NotificationModel, PaymentModel,
        ServiceOperationModel, VehicleModel,
    },
};

/// Low bcrypt cost keeps the login fixtures fast; never use outside tests.
const TEST_BCRYPT_COST: u32 = 4;

pub struct ShopFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_customer(
        &self,
        first_name: &str,
        last_name: &str,
        phone: &str,
    ) -> Result<CustomerModel, TestError> {
        let now = Utc::now().naive_utc();
        let normalized: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        let customer = entity::customer::ActiveModel {
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            email: ActiveValue::Set(Some(format!(
                "{}.{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ))),
            phone: ActiveValue::Set(phone.to_string()),
            phone_normalized: ActiveValue::Set(normalized),
            archived_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(customer.insert(self.db).await?)
    }

    pub async fn insert_vehicle(
        &self,
        customer_id: i32,
        year: i16,
        make: &str,
        model: &str,
    ) -> Result<VehicleModel, TestError> {
        let now = Utc::now().naive_utc();

        let vehicle = entity::vehicle::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            year: ActiveValue::Set(year),
            make: ActiveValue::Set(make.to_string()),
            model: ActiveValue::Set(model.to_string()),
            license_plate: ActiveValue::Set(None),
            vin: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            archived_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(vehicle.insert(self.db).await?)
    }

    pub async fn insert_service_operation(
        &self,
        name: &str,
        price_cents: i64,
        duration_minutes: i32,
    ) -> Result<ServiceOperationModel, TestError> {
        let now = Utc::now().naive_utc();

        let operation = entity::service_operation::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category: ActiveValue::Set("maintenance".to_string()),
            description: ActiveValue::Set(None),
            price_cents: ActiveValue::Set(price_cents),
            duration_minutes: ActiveValue::Set(duration_minutes),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(operation.insert(self.db).await?)
    }

    pub async fn insert_admin_account(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminAccountModel, TestError> {
        let now = Utc::now().naive_utc();
        let hash = bcrypt::hash(password, TEST_BCRYPT_COST)?;

        let account = entity::admin_account::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(hash),
            display_name: ActiveValue::Set("Test Admin".to_string()),
            last_login_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(account.insert(self.db).await?)
    }

    pub async fn insert_appointment(
        &self,
        customer_id: i32,
        vehicle_id: i32,
        scheduled_at: NaiveDateTime,
        duration_minutes: i32,
        status: AppointmentStatus,
    ) -> Result<AppointmentModel, TestError> {
        let now = Utc::now().naive_utc();

        let appointment = entity::appointment::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            scheduled_at: ActiveValue::Set(scheduled_at),
            duration_minutes: ActiveValue::Set(duration_minutes),
            status: ActiveValue::Set(status),
            service_address: ActiveValue::Set("42 Driveway Ln".to_string()),
            emergency: ActiveValue::Set(false),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(appointment.insert(self.db).await?)
    }

    pub async fn insert_appointment_service(
        &self,
        appointment_id: i32,
        service_operation_id: i32,
        price_cents: i64,
        duration_minutes: i32,
    ) -> Result<AppointmentServiceModel, TestError> {
        let line = entity::appointment_service::ActiveModel {
            appointment_id: ActiveValue::Set(appointment_id),
            service_operation_id: ActiveValue::Set(service_operation_id),
            price_cents: ActiveValue::Set(price_cents),
            duration_minutes: ActiveValue::Set(duration_minutes),
            ..Default::default()
        };

        Ok(line.insert(self.db).await?)
    }

    pub async fn insert_template(
        &self,
        name: &str,
        channel: MessageChannel,
        body: &str,
    ) -> Result<MessageTemplateModel, TestError> {
        let now = Utc::now().naive_utc();

        let template = entity::message_template::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            channel: ActiveValue::Set(channel),
            subject: ActiveValue::Set(None),
            body: ActiveValue::Set(body.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(template.insert(self.db).await?)
    }

    pub async fn insert_invoice(
        &self,
        appointment_id: i32,
        customer_id: i32,
        status: InvoiceStatus,
    ) -> Result<InvoiceModel, TestError> {
        let now = Utc::now().naive_utc();

        let invoice = entity::invoice::ActiveModel {
            appointment_id: ActiveValue::Set(appointment_id),
            customer_id: ActiveValue::Set(customer_id),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(invoice.insert(self.db).await?)
    }

    pub async fn insert_line_item(
        &self,
        invoice_id: i32,
        description: &str,
        quantity: i32,
        unit_price_cents: i64,
    ) -> Result<InvoiceLineItemModel, TestError> {
        let item = entity::invoice_line_item::ActiveModel {
            invoice_id: ActiveValue::Set(invoice_id),
            service_operation_id: ActiveValue::Set(None),
            description: ActiveValue::Set(description.to_string()),
            quantity: ActiveValue::Set(quantity),
            unit_price_cents: ActiveValue::Set(unit_price_cents),
            ..Default::default()
        };

        Ok(item.insert(self.db).await?)
    }

    pub async fn insert_payment(
        &self,
        invoice_id: i32,
        amount_cents: i64,
    ) -> Result<PaymentModel, TestError> {
        let now = Utc::now().naive_utc();

        let payment = entity::payment::ActiveModel {
            invoice_id: ActiveValue::Set(invoice_id),
            amount_cents: ActiveValue::Set(amount_cents),
            method: ActiveValue::Set("card".to_string()),
            paid_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(payment.insert(self.db).await?)
    }

    pub async fn insert_notification(
        &self,
        appointment_id: i32,
        customer_id: i32,
        kind: NotificationKind,
        status: NotificationStatus,
        scheduled_at: NaiveDateTime,
    ) -> Result<NotificationModel, TestError> {
        let now = Utc::now().naive_utc();

        let notification = entity::notification::ActiveModel {
            appointment_id: ActiveValue::Set(appointment_id),
            customer_id: ActiveValue::Set(customer_id),
            template_id: ActiveValue::Set(None),
            kind: ActiveValue::Set(kind),
            channel: ActiveValue::Set(MessageChannel::Sms),
            status: ActiveValue::Set(status),
            body: ActiveValue::Set("test notification".to_string()),
            scheduled_at: ActiveValue::Set(scheduled_at),
            sent_at: ActiveValue::Set(None),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(notification.insert(self.db).await?)
    }
}
