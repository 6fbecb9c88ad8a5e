use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use subtle::ConstantTimeEq;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use motorpool_core::AppError;
use motorpool_core::models::{NewAdministrator, NewVehicle, Page, Profile, Vehicle, VehicleFilter};
use motorpool_core::validate::{validate_administrator, validate_vehicle};

use crate::auth::{authenticate, authorize};
use crate::dto::{
    AdministratorListResponse, AdministratorRequest, AdministratorResponse, ErrorResponse,
    HealthResponse, HomeResponse, ListQuery, LoggedAdministrator, LoginRequest,
    ValidationErrorResponse, VehicleListResponse, VehicleRequest, VehicleResponse,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/administrators", post(create_administrator))
        .route("/administrators", get(list_administrators))
        .route("/administrator/{id}", get(get_administrator))
        .route("/administrator/{id}", delete(delete_administrator))
        .route("/vehicles", post(create_vehicle))
        .route("/vehicles", get(list_vehicles))
        .route("/vehicle/{id}", get(get_vehicle))
        .route("/vehicle/{id}", put(update_vehicle))
        .route("/vehicle/{id}", delete(delete_vehicle))
        .route("/vehiclesName/{name}", get(vehicles_by_name))
        .route("/vehiclesBrand/{brand}", get(vehicles_by_brand))
        .layer(middleware::from_fn(authorize))
        .layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let public = Router::new()
        .route("/", get(home))
        .route("/administrators/login", post(login))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = HomeResponse),
    ),
    tag = "system"
)]
pub async fn home() -> impl IntoResponse {
    axum::Json(HomeResponse {
        message: "Motorpool vehicle registry API",
        documentation: "/swagger-ui",
    })
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/administrators/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoggedAdministrator),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    ),
    tag = "administrators"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let admin = state
        .db
        .administrator_repo()
        .find_by_email(&body.email)
        .await?;

    let authenticated = admin
        .as_ref()
        .is_some_and(|admin| password_matches(&body.password, &admin.password));

    match admin {
        Some(admin) if authenticated => {
            let token = state.tokens.issue(&admin.email, admin.profile)?;
            let response = LoggedAdministrator {
                email: admin.email,
                profile: admin.profile.to_string(),
                token,
            };
            Ok(axum::Json(response).into_response())
        }
        _ => {
            let body = ErrorResponse {
                error: "invalid_credentials".to_string(),
                message: "Invalid email or password".to_string(),
            };
            Ok((StatusCode::UNAUTHORIZED, axum::Json(body)).into_response())
        }
    }
}

/// Constant-time password comparison to prevent timing attacks on login.
fn password_matches(given: &str, stored: &str) -> bool {
    given.as_bytes().ct_eq(stored.as_bytes()).into()
}

// ---------------------------------------------------------------------------
// Administrators
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/administrators",
    request_body = AdministratorRequest,
    responses(
        (status = 201, description = "Administrator created", body = AdministratorResponse),
        (status = 400, description = "Invalid payload", body = ValidationErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "administrators"
)]
pub async fn create_administrator(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<AdministratorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = validate_administrator(&body.email, &body.password, &body.profile);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.messages).into());
    }

    let repo = state.db.administrator_repo();

    // Email uniqueness is checked before insertion; the unique constraint
    // remains the backstop against races.
    if repo.find_by_email(&body.email).await?.is_some() {
        return Err(AppError::Validation(vec!["Email is already registered".to_string()]).into());
    }

    // Validation guarantees the literal parses.
    let profile = body.profile.parse().unwrap_or(Profile::Editor);
    let created = repo
        .create(&NewAdministrator {
            email: body.email,
            password: body.password,
            profile,
        })
        .await?;

    let location = format!("/administrator/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        axum::Json(AdministratorResponse::from(created)),
    ))
}

#[utoipa::path(
    get,
    path = "/administrators",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of administrators", body = AdministratorListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "administrators"
)]
pub async fn list_administrators(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let administrators = state
        .db
        .administrator_repo()
        .list(Page::new(query.page))
        .await?;

    let response = AdministratorListResponse {
        total: administrators.len(),
        administrators: administrators
            .into_iter()
            .map(AdministratorResponse::from)
            .collect(),
    };

    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/administrator/{id}",
    params(
        ("id" = Uuid, Path, description = "Administrator ID")
    ),
    responses(
        (status = 200, description = "Administrator details", body = AdministratorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "administrators"
)]
pub async fn get_administrator(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let admin = state
        .db
        .administrator_repo()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("administrator {id}")))?;

    Ok(axum::Json(AdministratorResponse::from(admin)))
}

#[utoipa::path(
    delete,
    path = "/administrator/{id}",
    params(
        ("id" = Uuid, Path, description = "Administrator ID")
    ),
    responses(
        (status = 204, description = "Administrator deleted"),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "administrators"
)]
pub async fn delete_administrator(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.db.administrator_repo().delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("administrator {id}")).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/vehicles",
    request_body = VehicleRequest,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleResponse),
        (status = 400, description = "Invalid payload", body = ValidationErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn create_vehicle(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<VehicleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let errors = validate_vehicle(&body.name, &body.brand, body.year);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.messages).into());
    }

    let created = state
        .db
        .vehicle_repo()
        .create(&NewVehicle {
            name: body.name,
            brand: body.brand,
            year: body.year,
        })
        .await?;

    let location = format!("/vehicle/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        axum::Json(VehicleResponse::from(created)),
    ))
}

#[utoipa::path(
    get,
    path = "/vehicles",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of vehicles", body = VehicleListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn list_vehicles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let vehicles = state
        .db
        .vehicle_repo()
        .list(Page::new(query.page), &VehicleFilter::default())
        .await?;

    Ok(axum::Json(vehicle_list_response(vehicles)))
}

#[utoipa::path(
    get,
    path = "/vehicle/{id}",
    params(
        ("id" = Uuid, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Vehicle details", body = VehicleResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn get_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let vehicle = state
        .db
        .vehicle_repo()
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("vehicle {id}")))?;

    Ok(axum::Json(VehicleResponse::from(vehicle)))
}

#[utoipa::path(
    get,
    path = "/vehiclesName/{name}",
    params(
        ("name" = String, Path, description = "Name substring, matched case-insensitively"),
        ListQuery,
    ),
    responses(
        (status = 200, description = "Vehicles matching the name filter", body = VehicleListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn vehicles_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let vehicles = state
        .db
        .vehicle_repo()
        .list(Page::new(query.page), &VehicleFilter::by_name(name))
        .await?;

    Ok(axum::Json(vehicle_list_response(vehicles)))
}

#[utoipa::path(
    get,
    path = "/vehiclesBrand/{brand}",
    params(
        ("brand" = String, Path, description = "Brand substring, matched case-insensitively"),
        ListQuery,
    ),
    responses(
        (status = 200, description = "Vehicles matching the brand filter", body = VehicleListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn vehicles_by_brand(
    State(state): State<Arc<AppState>>,
    Path(brand): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let vehicles = state
        .db
        .vehicle_repo()
        .list(Page::new(query.page), &VehicleFilter::by_brand(brand))
        .await?;

    Ok(axum::Json(vehicle_list_response(vehicles)))
}

#[utoipa::path(
    put,
    path = "/vehicle/{id}",
    params(
        ("id" = Uuid, Path, description = "Vehicle ID")
    ),
    request_body = VehicleRequest,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleResponse),
        (status = 400, description = "Invalid payload", body = ValidationErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn update_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    axum::Json(body): axum::Json<VehicleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.vehicle_repo();

    // Existence is checked before validation: an unknown id is a 404
    // regardless of what the payload contains.
    if repo.get_by_id(id).await?.is_none() {
        return Err(AppError::NotFound(format!("vehicle {id}")).into());
    }

    let errors = validate_vehicle(&body.name, &body.brand, body.year);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors.messages).into());
    }

    let updated = repo
        .update(
            id,
            &NewVehicle {
                name: body.name,
                brand: body.brand,
                year: body.year,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("vehicle {id}")))?;

    Ok(axum::Json(VehicleResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/vehicle/{id}",
    params(
        ("id" = Uuid, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn delete_vehicle(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.db.vehicle_repo().delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("vehicle {id}")).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match state.db.administrator_repo().health_check().await {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, axum::Json(response))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn vehicle_list_response(vehicles: Vec<Vehicle>) -> VehicleListResponse {
    VehicleListResponse {
        total: vehicles.len(),
        vehicles: vehicles.into_iter().map(VehicleResponse::from).collect(),
    }
}
