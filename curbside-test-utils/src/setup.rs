use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{error::TestError, fixtures::shop::ShopFixtures};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    /// Convert the test state into any type constructible from a database
    /// connection. This allows conversion to AppState without a circular
    /// dependency on the main curbside crate.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Fixture helpers for inserting shop records into the test database.
    pub fn shop(&self) -> ShopFixtures<'_> {
        ShopFixtures::new(&self.state.db)
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_shop_tables {
    // Pattern 1: No extra entities provided
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Customer),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::ServiceOperation),
                schema.create_table_from_entity(entity::prelude::AdminAccount),
                schema.create_table_from_entity(entity::prelude::Appointment),
                schema.create_table_from_entity(entity::prelude::AppointmentService),
                schema.create_table_from_entity(entity::prelude::Invoice),
                schema.create_table_from_entity(entity::prelude::InvoiceLineItem),
                schema.create_table_from_entity(entity::prelude::Payment),
                schema.create_table_from_entity(entity::prelude::MessageTemplate),
                schema.create_table_from_entity(entity::prelude::Notification)
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Extra entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Customer),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::ServiceOperation),
                schema.create_table_from_entity(entity::prelude::AdminAccount),
                schema.create_table_from_entity(entity::prelude::Appointment),
                schema.create_table_from_entity(entity::prelude::AppointmentService),
                schema.create_table_from_entity(entity::prelude::Invoice),
                schema.create_table_from_entity(entity::prelude::InvoiceLineItem),
                schema.create_table_from_entity(entity::prelude::Payment),
                schema.create_table_from_entity(entity::prelude::MessageTemplate),
                schema.create_table_from_entity(entity::prelude::Notification),
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
