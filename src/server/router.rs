//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here with its utoipa annotation; the
//! collected OpenAPI document is served through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - Public: service catalog, availability, booking
/// - Profile: session-authenticated customer profile and vehicle CRUD
/// - Admin: login, customer lookup, quick-add, appointment management,
///   invoices, templates, notifications, analytics
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application
/// router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Curbside", description = "Curbside API"), tags(
        (name = controller::service::SERVICE_TAG, description = "Service catalog routes"),
        (name = controller::appointment::APPOINTMENT_TAG, description = "Booking and availability routes"),
        (name = controller::customer::CUSTOMER_TAG, description = "Customer lookup routes"),
        (name = controller::profile::PROFILE_TAG, description = "Customer profile routes"),
        (name = controller::admin::ADMIN_TAG, description = "Admin dashboard routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::service::list_services))
        .routes(routes!(controller::appointment::get_availability))
        .routes(routes!(controller::appointment::create_appointment))
        .routes(routes!(
            controller::profile::get_profile,
            controller::profile::update_profile
        ))
        .routes(routes!(controller::profile::add_vehicle))
        .routes(routes!(
            controller::profile::update_vehicle,
            controller::profile::delete_vehicle
        ))
        .routes(routes!(controller::profile::logout))
        .routes(routes!(controller::admin::login::login))
        .routes(routes!(controller::customer::lookup_customers))
        .routes(routes!(controller::admin::appointment::list_appointments))
        .routes(routes!(controller::admin::appointment::quick_add))
        .routes(routes!(controller::admin::appointment::update_status))
        .routes(routes!(controller::admin::invoice::generate_invoice))
        .routes(routes!(controller::admin::invoice::get_invoice))
        .routes(routes!(controller::admin::invoice::record_payment))
        .routes(routes!(
            controller::admin::template::list_templates,
            controller::admin::template::create_template
        ))
        .routes(routes!(
            controller::admin::template::update_template,
            controller::admin::template::delete_template
        ))
        .routes(routes!(controller::admin::notification::list_notifications))
        .routes(routes!(controller::admin::analytics::get_summary))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
