use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        customer_id: i32,
        year: i16,
        make: &str,
        model: &str,
        license_plate: Option<String>,
        vin: Option<String>,
        notes: Option<String>,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let vehicle = entity::vehicle::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            year: ActiveValue::Set(year),
            make: ActiveValue::Set(make.to_string()),
            model: ActiveValue::Set(model.to_string()),
            license_plate: ActiveValue::Set(license_plate),
            vin: ActiveValue::Set(vin),
            notes: ActiveValue::Set(notes),
            archived_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }

    /// Non-archived vehicles belonging to a customer.
    pub async fn get_by_customer_id(
        &self,
        customer_id: i32,
    ) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::CustomerId.eq(customer_id))
            .filter(entity::vehicle::Column::ArchivedAt.is_null())
            .all(self.db)
            .await
    }

    /// Look for an existing vehicle matching the quick-add year/make/model
    /// fields so repeated bookings reuse the record instead of duplicating it.
    pub async fn find_by_customer_and_spec(
        &self,
        customer_id: i32,
        year: i16,
        make: &str,
        model: &str,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        let vehicles = self.get_by_customer_id(customer_id).await?;

        Ok(vehicles.into_iter().find(|v| {
            v.year == year
                && v.make.eq_ignore_ascii_case(make.trim())
                && v.model.eq_ignore_ascii_case(model.trim())
        }))
    }

    pub async fn update(
        &self,
        vehicle: entity::vehicle::Model,
        year: i16,
        make: &str,
        model: &str,
        license_plate: Option<String>,
        vin: Option<String>,
        notes: Option<String>,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let mut active: entity::vehicle::ActiveModel = vehicle.into();

        active.year = ActiveValue::Set(year);
        active.make = ActiveValue::Set(make.to_string());
        active.model = ActiveValue::Set(model.to_string());
        active.license_plate = ActiveValue::Set(license_plate);
        active.vin = ActiveValue::Set(vin);
        active.notes = ActiveValue::Set(notes);
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        active.update(self.db).await
    }

    /// Soft delete; the vehicle stays referenced by past appointments.
    pub async fn archive(
        &self,
        vehicle: entity::vehicle::Model,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mut active: entity::vehicle::ActiveModel = vehicle.into();

        active.archived_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await
    }
}
