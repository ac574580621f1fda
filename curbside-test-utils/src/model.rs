//! Type aliases for entity models used throughout test fixtures.

pub type AdminAccountModel = entity::admin_account::Model;
pub type AppointmentModel = entity::appointment::Model;
pub type AppointmentServiceModel = entity::appointment_service::Model;
pub type CustomerModel = entity::customer::Model;
pub type InvoiceModel = entity::invoice::Model;
pub type InvoiceLineItemModel = entity::invoice_line_item::Model;
pub type MessageTemplateModel = entity::message_template::Model;
pub type NotificationModel = entity::notification::Model;
pub type PaymentModel = entity::payment::Model;
pub type ServiceOperationModel = entity::service_operation::Model;
pub type VehicleModel = entity::vehicle::Model;
