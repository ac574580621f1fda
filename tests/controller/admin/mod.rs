mod analytics;
mod appointment;
mod invoice;
mod login;
mod notification;
mod template;
