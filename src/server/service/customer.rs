use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, vehicle::VehicleRepository},
    error::Error,
    util::phone::normalize_phone,
};

/// One phone-lookup hit: the customer plus their active vehicles, so the
/// quick-add form can prefill both without a second round trip.
pub struct CustomerMatch {
    pub customer: entity::customer::Model,
    pub vehicles: Vec<entity::vehicle::Model>,
}

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    /// Creates a new instance of [`CustomerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find customers by phone number.
    ///
    /// The raw input is normalized to digits before matching. Every match is
    /// returned; the dashboard disambiguates when there is more than one and
    /// treats an empty result as "new customer".
    pub async fn lookup_by_phone(&self, raw_phone: &str) -> Result<Vec<CustomerMatch>, Error> {
        let customer_repository = CustomerRepository::new(self.db);
        let vehicle_repository = VehicleRepository::new(self.db);

        let normalized = normalize_phone(raw_phone);
        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        let customers = customer_repository
            .find_by_normalized_phone(&normalized)
            .await?;

        let mut matches = Vec::with_capacity(customers.len());
        for customer in customers {
            let vehicles = vehicle_repository.get_by_customer_id(customer.id).await?;
            matches.push(CustomerMatch { customer, vehicles });
        }

        Ok(matches)
    }

    /// Get the customer matching the phone number, or create one from the
    /// provided details.
    pub async fn get_or_create(
        &self,
        first_name: &str,
        last_name: &str,
        email: Option<String>,
        phone: &str,
    ) -> Result<entity::customer::Model, Error> {
        let customer_repository = CustomerRepository::new(self.db);

        let normalized = normalize_phone(phone);

        let existing = customer_repository
            .find_by_normalized_phone(&normalized)
            .await?;
        if let Some(customer) = existing.into_iter().next() {
            return Ok(customer);
        }

        let customer = customer_repository
            .create(first_name, last_name, email, phone, &normalized)
            .await?;

        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use curbside_test_utils::prelude::*;

    use crate::server::service::customer::CustomerService;

    #[tokio::test]
    /// Expect lookup to match regardless of input formatting
    async fn test_lookup_normalizes_input() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let customer_service = CustomerService::new(&test.state.db);

        let customer = test
            .shop()
            .insert_customer("Rosa", "Delgado", "5558675309")
            .await?;
        test.shop()
            .insert_vehicle(customer.id, 2017, "Honda", "Civic")
            .await?;

        let matches = customer_service
            .lookup_by_phone("+1 (555) 867-5309")
            .await?;

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].customer.id, customer.id);
        assert_eq!(matches[0].vehicles.len(), 1);

        Ok(())
    }

    #[tokio::test]
    /// Expect empty result for a blank or non-numeric query
    async fn test_lookup_blank_query() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let customer_service = CustomerService::new(&test.state.db);

        let matches = customer_service.lookup_by_phone("n/a").await?;

        assert!(matches.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect get_or_create to reuse the existing record for a known phone
    async fn test_get_or_create_found() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let customer_service = CustomerService::new(&test.state.db);

        let existing = test
            .shop()
            .insert_customer("Rosa", "Delgado", "5558675309")
            .await?;

        let result = customer_service
            .get_or_create("Rosa", "Delgado", None, "(555) 867-5309")
            .await?;

        assert_eq!(result.id, existing.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect get_or_create to create a record for an unknown phone
    async fn test_get_or_create_created() -> Result<(), TestError> {
        let test = test_setup_with_shop_tables!()?;
        let customer_service = CustomerService::new(&test.state.db);

        let result = customer_service
            .get_or_create("Omar", "Haddad", None, "555-000-1111")
            .await?;

        assert_eq!(result.first_name, "Omar");
        assert_eq!(result.phone_normalized, "5550001111");

        Ok(())
    }
}
