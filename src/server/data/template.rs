use chrono::Utc;
use entity::message_template::MessageChannel;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct TemplateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemplateRepository<'a> {
    /// Creates a new instance of [`TemplateRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        channel: MessageChannel,
        subject: Option<String>,
        body: &str,
    ) -> Result<entity::message_template::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let template = entity::message_template::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            channel: ActiveValue::Set(channel),
            subject: ActiveValue::Set(subject),
            body: ActiveValue::Set(body.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        template.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::message_template::Model>, DbErr> {
        entity::prelude::MessageTemplate::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::message_template::Model>, DbErr> {
        entity::prelude::MessageTemplate::find()
            .filter(entity::message_template::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::message_template::Model>, DbErr> {
        entity::prelude::MessageTemplate::find()
            .order_by_asc(entity::message_template::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        template: entity::message_template::Model,
        name: &str,
        channel: MessageChannel,
        subject: Option<String>,
        body: &str,
    ) -> Result<entity::message_template::Model, DbErr> {
        let mut active: entity::message_template::ActiveModel = template.into();

        active.name = ActiveValue::Set(name.to_string());
        active.channel = ActiveValue::Set(channel);
        active.subject = ActiveValue::Set(subject);
        active.body = ActiveValue::Set(body.to_string());
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    /// Deletes a template
    ///
    /// Returns OK regardless of the template existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MessageTemplate::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
