use chrono::{NaiveDateTime, Utc};
use entity::invoice::InvoiceStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct InvoiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceRepository<'a> {
    /// Creates a new instance of [`InvoiceRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        appointment_id: i32,
        customer_id: i32,
        status: InvoiceStatus,
    ) -> Result<entity::invoice::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let invoice = entity::invoice::ActiveModel {
            appointment_id: ActiveValue::Set(appointment_id),
            customer_id: ActiveValue::Set(customer_id),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        invoice.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::invoice::Model>, DbErr> {
        entity::prelude::Invoice::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_appointment_id(
        &self,
        appointment_id: i32,
    ) -> Result<Option<entity::invoice::Model>, DbErr> {
        entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::AppointmentId.eq(appointment_id))
            .one(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        invoice: entity::invoice::Model,
        status: InvoiceStatus,
    ) -> Result<entity::invoice::Model, DbErr> {
        let mut active: entity::invoice::ActiveModel = invoice.into();

        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    pub async fn add_line_item(
        &self,
        invoice_id: i32,
        service_operation_id: Option<i32>,
        description: &str,
        quantity: i32,
        unit_price_cents: i64,
    ) -> Result<entity::invoice_line_item::Model, DbErr> {
        let item = entity::invoice_line_item::ActiveModel {
            invoice_id: ActiveValue::Set(invoice_id),
            service_operation_id: ActiveValue::Set(service_operation_id),
            description: ActiveValue::Set(description.to_string()),
            quantity: ActiveValue::Set(quantity),
            unit_price_cents: ActiveValue::Set(unit_price_cents),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    pub async fn get_line_items(
        &self,
        invoice_id: i32,
    ) -> Result<Vec<entity::invoice_line_item::Model>, DbErr> {
        entity::prelude::InvoiceLineItem::find()
            .filter(entity::invoice_line_item::Column::InvoiceId.eq(invoice_id))
            .all(self.db)
            .await
    }

    pub async fn add_payment(
        &self,
        invoice_id: i32,
        amount_cents: i64,
        method: &str,
    ) -> Result<entity::payment::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let payment = entity::payment::ActiveModel {
            invoice_id: ActiveValue::Set(invoice_id),
            amount_cents: ActiveValue::Set(amount_cents),
            method: ActiveValue::Set(method.to_string()),
            paid_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        payment.insert(self.db).await
    }

    pub async fn get_payments(
        &self,
        invoice_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::InvoiceId.eq(invoice_id))
            .all(self.db)
            .await
    }

    /// Payments recorded within `[from, to)`, for revenue reporting.
    pub async fn get_payments_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::PaidAt.gte(from))
            .filter(entity::payment::Column::PaidAt.lt(to))
            .all(self.db)
            .await
    }
}
