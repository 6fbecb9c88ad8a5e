use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Motorpool API",
        version = "0.1.0",
        description = "Vehicle registry with JWT-authenticated, role-based CRUD endpoints."
    ),
    paths(
        crate::routes::home,
        crate::routes::login,
        crate::routes::create_administrator,
        crate::routes::list_administrators,
        crate::routes::get_administrator,
        crate::routes::delete_administrator,
        crate::routes::create_vehicle,
        crate::routes::list_vehicles,
        crate::routes::get_vehicle,
        crate::routes::vehicles_by_name,
        crate::routes::vehicles_by_brand,
        crate::routes::update_vehicle,
        crate::routes::delete_vehicle,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::LoginRequest,
        crate::dto::LoggedAdministrator,
        crate::dto::AdministratorRequest,
        crate::dto::AdministratorResponse,
        crate::dto::AdministratorListResponse,
        crate::dto::VehicleRequest,
        crate::dto::VehicleResponse,
        crate::dto::VehicleListResponse,
        crate::dto::HomeResponse,
        crate::dto::HealthResponse,
        crate::dto::ValidationErrorResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "administrators", description = "Administrator accounts and login"),
        (name = "vehicles", description = "Vehicle registry"),
        (name = "system", description = "Health and system status"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds Bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Signed token obtained from POST /administrators/login.",
                        ))
                        .build(),
                ),
            );
        }
    }
}
