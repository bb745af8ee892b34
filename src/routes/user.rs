use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// User Router Module
///
/// The applicant-facing surface. Both routes sit behind the authentication
/// middleware layered on in `create_router`; the role check itself happens in
/// the handlers (`user` only for submission, `user` or `admin` for listing).
pub fn user_routes() -> Router<AppState> {
    Router::new()
        // POST /loans
        // Submits a new loan application. The payload runs through the field
        // validator before anything is persisted.
        .route("/loans", post(handlers::create_loan))
        // GET /loans/my-loans
        // Lists the requesting user's own applications, newest first.
        .route("/loans/my-loans", get(handlers::get_my_loans))
}
