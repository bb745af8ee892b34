use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Core Application Schemas ---

/// User
///
/// A record in the user directory. The password hash lives in the same table
/// but is never selected or serialized by this service; signup and login are
/// handled by the external auth flow.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    // Unique across the directory.
    pub email: String,
    // The RBAC field: 'user' or 'admin'.
    pub role: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// LoanStatus
///
/// Lifecycle status of a loan application. `Pending` is the initial state;
/// `Disbursed`, `Closed` and `Rejected` are terminal by convention only — no
/// transition table is enforced, so an admin may move a loan from any status
/// to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub enum LoanStatus {
    #[default]
    Pending,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Additional Info Required")]
    AdditionalInfoRequired,
    #[serde(rename = "Conditionally Approved")]
    ConditionallyApproved,
    Approved,
    Rejected,
    Disbursed,
    Closed,
}

impl LoanStatus {
    pub const ALL: [LoanStatus; 8] = [
        LoanStatus::Pending,
        LoanStatus::UnderReview,
        LoanStatus::AdditionalInfoRequired,
        LoanStatus::ConditionallyApproved,
        LoanStatus::Approved,
        LoanStatus::Rejected,
        LoanStatus::Disbursed,
        LoanStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "Pending",
            LoanStatus::UnderReview => "Under Review",
            LoanStatus::AdditionalInfoRequired => "Additional Info Required",
            LoanStatus::ConditionallyApproved => "Conditionally Approved",
            LoanStatus::Approved => "Approved",
            LoanStatus::Rejected => "Rejected",
            LoanStatus::Disbursed => "Disbursed",
            LoanStatus::Closed => "Closed",
        }
    }

    /// Parses the wire spelling (with spaces) back into the enum.
    pub fn parse(value: &str) -> Option<LoanStatus> {
        LoanStatus::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// StatusHistoryEntry
///
/// One entry in the append-only status trail. Note that `update_loan_status`
/// does not append here automatically; entries are written only when an admin
/// records one explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StatusHistoryEntry {
    pub status: LoanStatus,
    #[ts(type = "string")]
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

// --- Nested Sub-Documents ---

/// Address
///
/// Shared address shape used for the residential address and the co-applicant
/// address.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Address {
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    pub state: String,
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
}

fn default_country() -> String {
    "India".to_string()
}

/// PreviousAddress
///
/// Ordered history of earlier residences, most recent first as submitted.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PreviousAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[ts(type = "string | null")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_period_from: Option<NaiveDate>,
    #[ts(type = "string | null")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_period_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential_status: Option<String>,
}

/// EmergencyContact
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmergencyContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// ApplicantDetails
///
/// Personal, contact and tax information about the applicant. Only the
/// identity and contact fields are validated at submission; the rest is
/// carried verbatim into the document.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApplicantDetails {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[ts(type = "string | null")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default = "default_nationality")]
    pub nationality: String,
    #[serde(default)]
    pub dependents: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,

    // Contact information
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_contact_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,

    // Tax information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_residency_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_filing_status: Option<String>,
}

fn default_nationality() -> String {
    "Indian".to_string()
}

/// EmploymentDetails
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmploymentDetails {
    pub employer_name: String,
    pub position: String,
    #[serde(default)]
    pub years_at_current_employer: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default)]
    pub monthly_salary: f64,
    #[serde(default)]
    pub bonuses: f64,
    #[serde(default)]
    pub other_compensation: f64,
}

/// BankDetails
///
/// Disbursement account. `account_number` and `ifsc_code` are validated as
/// non-empty at submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BankDetails {
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    pub ifsc_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micr: Option<String>,
}

/// CreditHistory
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreditHistory {
    #[serde(default)]
    pub bankruptcies: u32,
    #[serde(default)]
    pub defaults: u32,
    #[serde(default)]
    pub late_payments: u32,
}

/// Reference
///
/// A personal reference contact supplied by the applicant.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// CoApplicantDetails
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CoApplicantDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[ts(type = "string | null")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// IdentityInformation
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IdentityInformation {
    pub id_type: String,
    pub id_number: String,
}

/// InternalNote
///
/// Admin-only processing note attached to an application.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InternalNote {
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
    #[ts(type = "string")]
    pub added_on: DateTime<Utc>,
}

/// VerificationCall
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VerificationCall {
    #[ts(type = "string | null")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub called_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacted_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// RiskAssessment
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskAssessment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessed_by: Option<String>,
    #[ts(type = "string | null")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessed_on: Option<DateTime<Utc>>,
}

/// ProcessingInfo
///
/// Internal processing state: notes, verification calls, risk assessment.
/// Mutated only by admin actors, never part of the submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProcessingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub internal_notes: Vec<InternalNote>,
    #[serde(default)]
    pub verification_calls: Vec<VerificationCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<RiskAssessment>,
}

// --- Aggregate Root ---

/// LoanApplication
///
/// The aggregate root: one loan record as stored in (and served from) the
/// document store. The serialized form of this struct *is* the persisted
/// document, so field naming here defines the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoanApplication {
    // Generated at creation, unique across the store, immutable.
    pub loan_id: Uuid,
    // Owner reference. A weak back-reference: deleting a user does not
    // cascade, joined views degrade to sentinel values instead.
    pub user_id: Uuid,

    pub status: LoanStatus,
    #[ts(type = "string")]
    pub application_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub status_history: Vec<StatusHistoryEntry>,

    // Loan details
    pub loan_amount: f64,
    // Term in months.
    pub loan_term: i32,
    pub loan_tenure: i32,
    pub purpose: String,
    pub loan_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose_details: Option<String>,
    #[serde(default)]
    pub interest_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emi: Option<f64>,
    #[serde(default)]
    pub processing_fee: f64,

    // Financial information
    pub monthly_income: f64,
    #[serde(default)]
    pub annual_income: f64,
    #[serde(default)]
    pub other_income: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_monthly_expenses: Option<f64>,
    #[serde(default = "default_existing_loans")]
    pub existing_loans: String,
    #[serde(default)]
    pub existing_emi: f64,
    #[serde(default)]
    pub credit_score: f64,
    #[serde(default)]
    pub credit_history: CreditHistory,
    #[serde(default)]
    pub repayment_capacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_to_income_ratio: Option<f64>,

    // Applicant and employment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_details: Option<ApplicantDetails>,
    pub employment_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_details: Option<EmploymentDetails>,

    // Residence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential_address: Option<Address>,
    #[serde(default)]
    pub previous_addresses: Vec<PreviousAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_at_current_address: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_at_current_address: Option<i32>,

    // Banking, references, co-applicant, identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub co_applicant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_applicant_details: Option<CoApplicantDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_information: Option<IdentityInformation>,

    // Admin-only processing state.
    #[serde(default)]
    pub processing_info: ProcessingInfo,
}

fn default_existing_loans() -> String {
    "No".to_string()
}

// --- Request Payloads (Input Schemas) ---

/// CreateLoanRequest
///
/// Input payload for submitting a new loan application (POST /loans).
///
/// The six schema-required fields are `Option<T>` so the validator can report
/// the exact set of absent names instead of failing deserialization; the
/// validator guarantees they are `Some` (and in range) before the aggregate is
/// built.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateLoanRequest {
    pub loan_amount: Option<f64>,
    pub loan_term: Option<f64>,
    pub purpose: Option<String>,
    pub monthly_income: Option<f64>,
    pub loan_type: Option<String>,
    pub employment_type: Option<String>,

    #[serde(default)]
    pub loan_tenure: Option<f64>,
    #[serde(default)]
    pub loan_purpose: Option<String>,
    #[serde(default)]
    pub purpose_details: Option<String>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub emi: Option<f64>,
    #[serde(default)]
    pub processing_fee: Option<f64>,

    #[serde(default)]
    pub annual_income: Option<f64>,
    #[serde(default)]
    pub other_income: Option<f64>,
    #[serde(default)]
    pub total_monthly_expenses: Option<f64>,
    #[serde(default)]
    pub existing_loans: Option<String>,
    #[serde(default)]
    pub existing_emi: Option<f64>,
    #[serde(default)]
    pub credit_score: Option<f64>,
    #[serde(default)]
    pub credit_history: Option<CreditHistory>,
    #[serde(default)]
    pub repayment_capacity: Option<f64>,
    #[serde(default)]
    pub debt_to_income_ratio: Option<f64>,

    #[serde(default)]
    pub applicant_details: Option<ApplicantDetails>,
    #[serde(default)]
    pub employment_details: Option<EmploymentDetails>,
    #[serde(default)]
    pub residential_status: Option<String>,
    #[serde(default)]
    pub residential_address: Option<Address>,
    #[serde(default)]
    pub previous_addresses: Vec<PreviousAddress>,
    #[serde(default)]
    pub years_at_current_address: Option<f64>,
    #[serde(default)]
    pub months_at_current_address: Option<i32>,
    #[serde(default)]
    pub bank_details: Option<BankDetails>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub co_applicant: Option<bool>,
    #[serde(default)]
    pub co_applicant_details: Option<CoApplicantDetails>,
    #[serde(default)]
    pub identity_information: Option<IdentityInformation>,
}

impl CreateLoanRequest {
    /// Builds the persistent aggregate from a validated submission.
    ///
    /// Must only be called after the field validator has passed: the required
    /// options are unwrapped to their defaults rather than panicking, but the
    /// resulting record is only meaningful for a payload that cleared
    /// validation. Ownership, identifier, initial status and timestamps are
    /// set here, never taken from the client.
    pub fn into_application(self, user_id: Uuid, loan_id: Uuid, now: DateTime<Utc>) -> LoanApplication {
        let loan_term = self.loan_term.unwrap_or_default() as i32;
        LoanApplication {
            loan_id,
            user_id,
            status: LoanStatus::Pending,
            application_date: now,
            last_updated: now,
            status_history: Vec::new(),
            loan_amount: self.loan_amount.unwrap_or_default(),
            loan_term,
            // The tenure mirrors the term unless the client distinguishes them.
            loan_tenure: self.loan_tenure.map(|t| t as i32).unwrap_or(loan_term),
            purpose: self.purpose.unwrap_or_default(),
            loan_type: self.loan_type.unwrap_or_default(),
            loan_purpose: self.loan_purpose,
            purpose_details: self.purpose_details,
            interest_rate: self.interest_rate.unwrap_or_default(),
            emi: self.emi,
            processing_fee: self.processing_fee.unwrap_or_default(),
            monthly_income: self.monthly_income.unwrap_or_default(),
            annual_income: self.annual_income.unwrap_or_default(),
            other_income: self.other_income.unwrap_or_default(),
            total_monthly_expenses: self.total_monthly_expenses,
            existing_loans: self.existing_loans.unwrap_or_else(default_existing_loans),
            existing_emi: self.existing_emi.unwrap_or_default(),
            credit_score: self.credit_score.unwrap_or_default(),
            credit_history: self.credit_history.unwrap_or_default(),
            repayment_capacity: self.repayment_capacity.unwrap_or_default(),
            debt_to_income_ratio: self.debt_to_income_ratio,
            applicant_details: self.applicant_details,
            employment_type: self.employment_type.unwrap_or_default(),
            employment_details: self.employment_details,
            residential_status: self.residential_status,
            residential_address: self.residential_address,
            previous_addresses: self.previous_addresses,
            years_at_current_address: self.years_at_current_address,
            months_at_current_address: self.months_at_current_address,
            bank_details: self.bank_details,
            references: self.references,
            co_applicant: self.co_applicant.unwrap_or(false),
            co_applicant_details: self.co_applicant_details,
            identity_information: self.identity_information,
            processing_info: ProcessingInfo::default(),
        }
    }
}

/// UpdateStatusRequest
///
/// Input payload for the admin status update (PUT /loans/admin/update-status).
/// Both fields are optional at the serde level so absence yields the required
/// 400 with a named message instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateStatusRequest {
    pub loan_id: Option<Uuid>,
    pub status: Option<String>,
}

// --- Output Schemas ---

/// LoanJoinedView
///
/// A loan record augmented with the owning user's display name and email for
/// admin presentation. When the referenced user cannot be resolved the
/// sentinel values "Unknown User"/"Unknown Email" are substituted rather than
/// failing the listing.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoanJoinedView {
    #[serde(flatten)]
    pub loan: LoanApplication,
    pub user_name: String,
    pub user_email: String,
}

/// AdminStats
///
/// Aggregate dashboard counters. `total_amount` is the sum of every loan's
/// `loan_amount`, pre-formatted as an INR currency string with thousands
/// grouping and no decimals.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_loans: i64,
    pub pending_approvals: i64,
    pub total_amount: String,
}

/// RecentUser
///
/// One row of the admin "recent users" listing: directory fields plus the
/// user's loan count and a date-only join timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecentUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    // YYYY-MM-DD
    pub joined: String,
    pub loan_count: i64,
}

/// DeletedLoan
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeletedLoan {
    pub loan_id: Uuid,
}

// --- Response Envelopes ---

/// CreateLoanResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateLoanResponse {
    pub success: bool,
    pub message: String,
    pub loan_id: Uuid,
}

/// LoanListResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoanListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<LoanApplication>,
}

/// AdminLoanListResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdminLoanListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<LoanJoinedView>,
}

/// LoanDetailResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoanDetailResponse {
    pub success: bool,
    pub data: LoanJoinedView,
}

/// UpdateStatusResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateStatusResponse {
    pub success: bool,
    pub message: String,
    pub data: LoanApplication,
}

/// DeleteLoanResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeleteLoanResponse {
    pub success: bool,
    pub message: String,
    pub data: DeletedLoan,
}

/// AdminStatsResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdminStatsResponse {
    pub success: bool,
    pub data: AdminStats,
}

/// RecentUsersResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecentUsersResponse {
    pub success: bool,
    pub data: Vec<RecentUser>,
}
