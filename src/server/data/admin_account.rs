use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct AdminAccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminAccountRepository<'a> {
    /// Creates a new instance of [`AdminAccountRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        display_name: &str,
    ) -> Result<entity::admin_account::Model, DbErr> {
        let account = entity::admin_account::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            last_login_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::admin_account::Model>, DbErr> {
        entity::prelude::AdminAccount::find()
            .filter(entity::admin_account::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn touch_last_login(
        &self,
        account: entity::admin_account::Model,
    ) -> Result<entity::admin_account::Model, DbErr> {
        let mut active: entity::admin_account::ActiveModel = account.into();

        active.last_login_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        active.update(self.db).await
    }
}
