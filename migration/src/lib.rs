pub use sea_orm_migration::prelude::*;

mod m20260312_000001_create_customer_table;
mod m20260312_000002_create_vehicle_table;
mod m20260312_000003_create_service_operation_table;
mod m20260312_000004_create_admin_account_table;
mod m20260312_000005_create_appointment_table;
mod m20260312_000006_create_appointment_service_table;
mod m20260312_000007_create_invoice_table;
mod m20260312_000008_create_invoice_line_item_table;
mod m20260312_000009_create_payment_table;
mod m20260312_000010_create_message_template_table;
mod m20260312_000011_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260312_000001_create_customer_table::Migration),
            Box::new(m20260312_000002_create_vehicle_table::Migration),
            Box::new(m20260312_000003_create_service_operation_table::Migration),
            Box::new(m20260312_000004_create_admin_account_table::Migration),
            Box::new(m20260312_000005_create_appointment_table::Migration),
            Box::new(m20260312_000006_create_appointment_service_table::Migration),
            Box::new(m20260312_000007_create_invoice_table::Migration),
            Box::new(m20260312_000008_create_invoice_line_item_table::Migration),
            Box::new(m20260312_000009_create_payment_table::Migration),
            Box::new(m20260312_000010_create_message_template_table::Migration),
            Box::new(m20260312_000011_create_notification_table::Migration),
        ]
    }
}
