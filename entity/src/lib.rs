pub mod admin_account;
pub mod appointment;
pub mod appointment_service;
pub mod customer;
pub mod invoice;
pub mod invoice_line_item;
pub mod message_template;
pub mod notification;
pub mod payment;
pub mod service_operation;
pub mod vehicle;

pub mod prelude {
    pub use super::admin_account::Entity as AdminAccount;
    pub use super::appointment::Entity as Appointment;
    pub use super::appointment_service::Entity as AppointmentService;
    pub use super::customer::Entity as Customer;
    pub use super::invoice::Entity as Invoice;
    pub use super::invoice_line_item::Entity as InvoiceLineItem;
    pub use super::message_template::Entity as MessageTemplate;
    pub use super::notification::Entity as Notification;
    pub use super::payment::Entity as Payment;
    pub use super::service_operation::Entity as ServiceOperation;
    pub use super::vehicle::Entity as Vehicle;
}
