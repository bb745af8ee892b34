use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, put},
};

/// Admin Router Module
///
/// The review surface, nested under `/loans/admin`. Every handler here
/// enforces the 'admin' role via `AuthUser::require_role` after the
/// authentication layer has resolved the claims; a `user`-role credential is
/// rejected with 403 before any record is read or mutated.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /loans/admin/all-loans
        // Every application in the store, joined with owner name/email.
        .route("/all-loans", get(handlers::get_all_loans))
        // PUT /loans/admin/update-status
        // Overwrites one application's lifecycle status.
        .route("/update-status", put(handlers::update_loan_status))
        // GET /loans/admin/stats
        // Dashboard counters and the formatted total loan amount.
        .route("/stats", get(handlers::get_admin_stats))
        // GET /loans/admin/recent-users
        // Ten most recently created users with their loan counts.
        .route("/recent-users", get(handlers::get_recent_users))
        // GET/DELETE /loans/admin/loan/{loan_id}
        // Single-application detail view and removal.
        .route(
            "/loan/{loan_id}",
            get(handlers::get_loan_by_id).delete(handlers::delete_loan),
        )
}
