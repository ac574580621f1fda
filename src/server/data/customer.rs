use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new customer
    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        email: Option<String>,
        phone: &str,
        phone_normalized: &str,
    ) -> Result<entity::customer::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let customer = entity::customer::ActiveModel {
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            email: ActiveValue::Set(email),
            phone: ActiveValue::Set(phone.to_string()),
            phone_normalized: ActiveValue::Set(phone_normalized.to_string()),
            archived_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        customer.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(id).one(self.db).await
    }

    /// All non-archived customers whose normalized phone matches exactly.
    ///
    /// The phone column is unique so this returns at most one row today, but
    /// archived customers can share a number with their replacement record,
    /// and the lookup endpoint handles disambiguating multiple hits.
    pub async fn find_by_normalized_phone(
        &self,
        phone_normalized: &str,
    ) -> Result<Vec<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::PhoneNormalized.eq(phone_normalized))
            .filter(entity::customer::Column::ArchivedAt.is_null())
            .all(self.db)
            .await
    }

    pub async fn update_profile(
        &self,
        customer: entity::customer::Model,
        first_name: &str,
        last_name: &str,
        email: Option<String>,
        phone: &str,
        phone_normalized: &str,
    ) -> Result<entity::customer::Model, DbErr> {
        let mut active: entity::customer::ActiveModel = customer.into();

        active.first_name = ActiveValue::Set(first_name.to_string());
        active.last_name = ActiveValue::Set(last_name.to_string());
        active.email = ActiveValue::Set(email);
        active.phone = ActiveValue::Set(phone.to_string());
        active.phone_normalized = ActiveValue::Set(phone_normalized.to_string());
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    /// Soft delete; archived customers are excluded from lookup and booking.
    pub async fn archive(
        &self,
        customer: entity::customer::Model,
    ) -> Result<entity::customer::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mut active: entity::customer::ActiveModel = customer.into();

        active.archived_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await
    }
}
