use crate::{
    AppState,
    auth::{AuthUser, ROLE_ADMIN, ROLE_USER},
    error::{ApiError, ApiResult},
    models::{
        AdminLoanListResponse, AdminStats, AdminStatsResponse, CreateLoanRequest,
        CreateLoanResponse, DeleteLoanResponse, DeletedLoan, LoanApplication, LoanDetailResponse,
        LoanJoinedView, LoanListResponse, LoanStatus, RecentUser, RecentUsersResponse,
        UpdateStatusRequest, UpdateStatusResponse, User,
    },
    validation,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

/// Sentinel substituted when a loan's owner no longer resolves in the user
/// directory. Joined views degrade to these rather than failing the listing.
pub const UNKNOWN_USER: &str = "Unknown User";
pub const UNKNOWN_EMAIL: &str = "Unknown Email";

/// Number of rows served by the recent-users dashboard panel.
const RECENT_USERS_LIMIT: i64 = 10;

// --- Helpers ---

/// Formats a rupee amount as an INR currency string with en-US thousands
/// grouping and no decimals, e.g. `₹1,250,000`.
pub fn format_inr(amount: f64) -> String {
    let rupees = amount.round() as i64;
    let digits = rupees.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rupees < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Joins loan records with their owners' directory entries. The directory
/// snapshot is looked up once for the whole batch by the caller; any owner
/// missing from it gets the sentinel name/email.
fn join_loans(loans: Vec<LoanApplication>, users: Vec<User>) -> Vec<LoanJoinedView> {
    let by_id: HashMap<Uuid, User> = users.into_iter().map(|u| (u.id, u)).collect();

    loans
        .into_iter()
        .map(|loan| {
            let owner = by_id.get(&loan.user_id);
            LoanJoinedView {
                user_name: owner.map_or_else(|| UNKNOWN_USER.to_string(), |u| u.name.clone()),
                user_email: owner.map_or_else(|| UNKNOWN_EMAIL.to_string(), |u| u.email.clone()),
                loan,
            }
        })
        .collect()
}

// --- Handlers ---

/// create_loan
///
/// [User Route] Handles submission of a new loan application.
///
/// The payload must clear the field validator before anything touches the
/// store: missing required fields and rule violations are both reported in
/// full, never one at a time. Identity (`user_id`) comes from the
/// authenticated session; `loan_id`, initial status and timestamps are set
/// server-side.
#[utoipa::path(
    post,
    path = "/loans",
    request_body = CreateLoanRequest,
    responses(
        (status = 201, description = "Application submitted", body = CreateLoanResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Role not authorized")
    )
)]
pub async fn create_loan(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateLoanRequest>,
) -> ApiResult<(StatusCode, Json<CreateLoanResponse>)> {
    auth.require_role(&[ROLE_USER])?;
    validation::validate_create_loan(&payload)?;

    let loan = payload.into_application(auth.id, Uuid::new_v4(), Utc::now());
    let loan_id = loan.loan_id;

    state.repo.insert_loan(&loan).await?;
    tracing::info!(%loan_id, user_id = %auth.id, "loan application submitted");

    Ok((
        StatusCode::CREATED,
        Json(CreateLoanResponse {
            success: true,
            message: "Loan application submitted successfully".to_string(),
            loan_id,
        }),
    ))
}

/// get_my_loans
///
/// [Authenticated Route] Lists every application owned by the requesting
/// user, newest first.
#[utoipa::path(
    get,
    path = "/loans/my-loans",
    responses((status = 200, description = "My loan applications", body = LoanListResponse))
)]
pub async fn get_my_loans(
    auth: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<LoanListResponse>> {
    auth.require_role(&[ROLE_USER, ROLE_ADMIN])?;

    let loans = state.repo.loans_for_user(auth.id).await?;

    Ok(Json(LoanListResponse {
        success: true,
        count: loans.len(),
        data: loans,
    }))
}

/// get_all_loans
///
/// [Admin Route] Lists every application in the store, newest first, each
/// joined with the owner's name and email.
///
/// The directory join is one batched lookup over the distinct owner ids, not
/// a round-trip per record; a vanished owner degrades to the sentinel values.
#[utoipa::path(
    get,
    path = "/loans/admin/all-loans",
    responses((status = 200, description = "All loan applications, joined", body = AdminLoanListResponse))
)]
pub async fn get_all_loans(
    auth: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<AdminLoanListResponse>> {
    auth.require_role(&[ROLE_ADMIN])?;

    let loans = state.repo.all_loans().await?;

    let mut owner_ids: Vec<Uuid> = loans.iter().map(|l| l.user_id).collect();
    owner_ids.sort_unstable();
    owner_ids.dedup();

    let users = state.repo.users_by_ids(&owner_ids).await?;
    let data = join_loans(loans, users);

    Ok(Json(AdminLoanListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// get_loan_by_id
///
/// [Admin Route] Fetches one application by its loan identifier, joined with
/// the owner's directory entry.
#[utoipa::path(
    get,
    path = "/loans/admin/loan/{loan_id}",
    params(("loan_id" = Uuid, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Found", body = LoanDetailResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_loan_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(loan_id): Path<Uuid>,
) -> ApiResult<Json<LoanDetailResponse>> {
    auth.require_role(&[ROLE_ADMIN])?;

    let loan = state
        .repo
        .loan_by_id(loan_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Loan application".to_string()))?;

    let owner = state.repo.get_user(loan.user_id).await?;
    let mut data = join_loans(vec![loan], owner.into_iter().collect());

    Ok(Json(LoanDetailResponse {
        success: true,
        // join_loans returned exactly one view for the one loan passed in.
        data: data.remove(0),
    }))
}

/// update_loan_status
///
/// [Admin Route] Overwrites an application's lifecycle status.
///
/// The status string must parse into the status enum; anything else is
/// rejected with 400 and the record is left untouched. No transition table is
/// enforced (any status to any status), and the status history is not
/// appended automatically.
#[utoipa::path(
    put,
    path = "/loans/admin/update-status",
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated", body = UpdateStatusResponse),
        (status = 400, description = "Missing fields or invalid status"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_loan_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<UpdateStatusRequest>,
) -> ApiResult<Json<UpdateStatusResponse>> {
    auth.require_role(&[ROLE_ADMIN])?;

    let (Some(loan_id), Some(status_str)) = (payload.loan_id, payload.status.as_deref()) else {
        return Err(ApiError::InvalidInput(
            "Loan ID and status are required".to_string(),
        ));
    };

    let status = LoanStatus::parse(status_str).ok_or_else(|| ApiError::InvalidStatus {
        given: status_str.to_string(),
    })?;

    let updated = state
        .repo
        .update_loan_status(loan_id, status, Utc::now())
        .await?
        .ok_or_else(|| ApiError::NotFound("Loan application".to_string()))?;

    tracing::info!(%loan_id, status = %status, admin_id = %auth.id, "loan status updated");

    Ok(Json(UpdateStatusResponse {
        success: true,
        message: "Loan status updated successfully".to_string(),
        data: updated,
    }))
}

/// delete_loan
///
/// [Admin Route] Removes an application from the store.
#[utoipa::path(
    delete,
    path = "/loans/admin/loan/{loan_id}",
    params(("loan_id" = Uuid, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Deleted", body = DeleteLoanResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_loan(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(loan_id): Path<Uuid>,
) -> ApiResult<Json<DeleteLoanResponse>> {
    auth.require_role(&[ROLE_ADMIN])?;

    if !state.repo.delete_loan(loan_id).await? {
        return Err(ApiError::NotFound("Loan application".to_string()));
    }

    tracing::info!(%loan_id, admin_id = %auth.id, "loan application deleted");

    Ok(Json(DeleteLoanResponse {
        success: true,
        message: "Loan application deleted successfully".to_string(),
        data: DeletedLoan { loan_id },
    }))
}

/// get_admin_stats
///
/// [Admin Route] Core dashboard counters: user total, loan total, pending
/// approvals, and the summed loan amount formatted as an INR currency string.
#[utoipa::path(
    get,
    path = "/loans/admin/stats",
    responses((status = 200, description = "Dashboard statistics", body = AdminStatsResponse))
)]
pub async fn get_admin_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<AdminStatsResponse>> {
    auth.require_role(&[ROLE_ADMIN])?;

    let total_users = state.repo.count_users().await?;
    let total_loans = state.repo.count_loans().await?;
    let pending_approvals = state
        .repo
        .count_loans_with_status(LoanStatus::Pending)
        .await?;
    let total_amount = state.repo.total_loan_amount().await?;

    Ok(Json(AdminStatsResponse {
        success: true,
        data: AdminStats {
            total_users,
            total_loans,
            pending_approvals,
            total_amount: format_inr(total_amount),
        },
    }))
}

/// get_recent_users
///
/// [Admin Route] The ten most recently created users, each annotated with
/// their loan count. The counts are computed per user; the list is bounded at
/// ten rows so the extra round-trips stay negligible.
#[utoipa::path(
    get,
    path = "/loans/admin/recent-users",
    responses((status = 200, description = "Recent users", body = RecentUsersResponse))
)]
pub async fn get_recent_users(
    auth: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<RecentUsersResponse>> {
    auth.require_role(&[ROLE_ADMIN])?;

    let users = state.repo.recent_users(RECENT_USERS_LIMIT).await?;

    let mut data = Vec::with_capacity(users.len());
    for user in users {
        let loan_count = state.repo.loan_count_for_user(user.id).await?;
        data.push(RecentUser {
            id: user.id,
            name: user.name,
            email: user.email,
            joined: user.created_at.format("%Y-%m-%d").to_string(),
            loan_count,
        });
    }

    Ok(Json(RecentUsersResponse {
        success: true,
        data,
    }))
}
