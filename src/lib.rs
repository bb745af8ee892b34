use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod validation;

// Routing segregation (Public, User, Admin).
pub mod routes;
use auth::AuthUser;
use routes::{admin, public, user};

// --- Public Re-exports ---

// Makes core state types easily accessible to the binary entry point.
pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use repository::{PostgresRepository, RepositoryState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the service,
/// aggregating every handler decorated with `#[utoipa::path]` and the wire
/// schemas. Served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_loan, handlers::get_my_loans, handlers::get_all_loans,
        handlers::get_loan_by_id, handlers::update_loan_status, handlers::delete_loan,
        handlers::get_admin_stats, handlers::get_recent_users
    ),
    components(
        schemas(
            models::LoanApplication, models::CreateLoanRequest, models::UpdateStatusRequest,
            models::LoanStatus, models::StatusHistoryEntry, models::ApplicantDetails,
            models::EmploymentDetails, models::Address, models::BankDetails,
            models::CoApplicantDetails, models::IdentityInformation, models::ProcessingInfo,
            models::LoanJoinedView, models::AdminStats, models::RecentUser,
            models::CreateLoanResponse, models::LoanListResponse, models::AdminLoanListResponse,
            models::LoanDetailResponse, models::UpdateStatusResponse, models::DeleteLoanResponse,
            models::AdminStatsResponse, models::RecentUsersResponse,
            error::FieldError,
        )
    ),
    tags(
        (name = "loan-portal", description = "Online Loan Application API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding the application's
/// services and configuration, shared across all incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Repository layer: the loan record store and user directory.
    pub repo: RepositoryState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// Allow extractors to selectively pull components from the shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces authentication on a router subtree by attempting to extract
/// `AuthUser` from the request. If token verification fails, the extractor
/// rejects with 401 before any handler runs; on success the request proceeds
/// and the handler re-extracts the claims as an explicit argument.
async fn auth_middleware(_auth_user: AuthUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the routing structure, applies global and scoped middleware, and
/// registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration: permissive; the deployed frontends vary.
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public routes: no middleware applied.
        .merge(public::public_routes())
        // User routes: protected by the authentication layer; role membership
        // is checked per-handler.
        .merge(
            user::user_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Admin routes: nested under /loans/admin, same authentication layer;
        // the 'admin' role check happens inside every handler.
        .nest(
            "/loans/admin",
            admin::admin_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        .with_state(state);

    // 3. Observability and correlation layers (outermost).
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID generation: unique UUID per request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request tracing: wraps the request/response lifecycle in
                // a span correlated by the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID propagation back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS layer.
        .layer(cors)
}

/// trace_span_logger
///
/// Customizes span creation for `TraceLayer`: includes the `x-request-id`
/// header (if present) alongside the HTTP method and URI so every log line
/// for one request is correlated by a unique ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
