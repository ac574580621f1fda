use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ServiceOperationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceOperationRepository<'a> {
    /// Creates a new instance of [`ServiceOperationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        category: &str,
        description: Option<String>,
        price_cents: i64,
        duration_minutes: i32,
    ) -> Result<entity::service_operation::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let operation = entity::service_operation::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category: ActiveValue::Set(category.to_string()),
            description: ActiveValue::Set(description),
            price_cents: ActiveValue::Set(price_cents),
            duration_minutes: ActiveValue::Set(duration_minutes),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        operation.insert(self.db).await
    }

    /// Active catalog entries, ordered for display.
    pub async fn get_active(&self) -> Result<Vec<entity::service_operation::Model>, DbErr> {
        entity::prelude::ServiceOperation::find()
            .filter(entity::service_operation::Column::Active.eq(true))
            .order_by_asc(entity::service_operation::Column::Category)
            .order_by_asc(entity::service_operation::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::service_operation::Model>, DbErr> {
        entity::prelude::ServiceOperation::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::service_operation::Model>, DbErr> {
        entity::prelude::ServiceOperation::find()
            .filter(entity::service_operation::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }
}
