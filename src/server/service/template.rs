use entity::message_template::MessageChannel;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::template::UpsertTemplateDto,
    server::{
        data::template::TemplateRepository,
        error::{booking::BookingError, Error},
        util::vehicle::vehicle_label,
    },
};

/// Parse a channel string from the API into the entity enum.
pub fn parse_channel(value: &str) -> Result<MessageChannel, Error> {
    MessageChannel::try_from_value(&value.to_string())
        .map_err(|_| BookingError::InvalidStatus(value.to_string()).into())
}

/// Substitute `{placeholder}` markers in a template body.
///
/// Unknown markers are left untouched so a typo in a template shows up in the
/// rendered message instead of silently vanishing.
pub fn render(body: &str, context: &[(&str, String)]) -> String {
    let mut rendered = body.to_string();

    for (key, value) in context {
        rendered = rendered.replace(&format!("{{{}}}", key), value);
    }

    rendered
}

/// Placeholder values available to appointment-related templates.
pub fn appointment_context(
    appointment: &entity::appointment::Model,
    customer: &entity::customer::Model,
    vehicle: &entity::vehicle::Model,
) -> Vec<(&'static str, String)> {
    vec![
        (
            "customer_name",
            format!("{} {}", customer.first_name, customer.last_name),
        ),
        ("first_name", customer.first_name.clone()),
        (
            "appointment_date",
            appointment.scheduled_at.format("%B %d, %Y").to_string(),
        ),
        (
            "appointment_time",
            appointment.scheduled_at.format("%H:%M").to_string(),
        ),
        (
            "vehicle",
            vehicle_label(vehicle.year, &vehicle.make, &vehicle.model),
        ),
        ("service_address", appointment.service_address.clone()),
    ]
}

pub struct TemplateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateService<'a> {
    /// Creates a new instance of [`TemplateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        dto: &UpsertTemplateDto,
    ) -> Result<entity::message_template::Model, Error> {
        let template_repository = TemplateRepository::new(self.db);

        let channel = parse_channel(&dto.channel)?;
        let template = template_repository
            .create(&dto.name, channel, dto.subject.clone(), &dto.body)
            .await?;

        Ok(template)
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &UpsertTemplateDto,
    ) -> Result<entity::message_template::Model, Error> {
        let template_repository = TemplateRepository::new(self.db);

        let template = template_repository
            .find_by_id(id)
            .await?
            .ok_or(BookingError::TemplateNotFound(id))?;

        let channel = parse_channel(&dto.channel)?;
        let updated = template_repository
            .update(template, &dto.name, channel, dto.subject.clone(), &dto.body)
            .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let template_repository = TemplateRepository::new(self.db);

        let result = template_repository.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(BookingError::TemplateNotFound(id).into());
        }

        Ok(())
    }
}
