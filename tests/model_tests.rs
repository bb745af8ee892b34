mod common;

use chrono::{TimeZone, Utc};
use common::valid_request;
use loan_portal::{
    handlers::format_inr,
    models::{CreateLoanRequest, LoanApplication, LoanJoinedView, LoanStatus},
};
use uuid::Uuid;

// --- LoanStatus ---

#[test]
fn status_serializes_with_spaced_wire_spellings() {
    assert_eq!(
        serde_json::to_string(&LoanStatus::UnderReview).unwrap(),
        "\"Under Review\""
    );
    assert_eq!(
        serde_json::to_string(&LoanStatus::AdditionalInfoRequired).unwrap(),
        "\"Additional Info Required\""
    );
    assert_eq!(
        serde_json::to_string(&LoanStatus::ConditionallyApproved).unwrap(),
        "\"Conditionally Approved\""
    );
    assert_eq!(serde_json::to_string(&LoanStatus::Pending).unwrap(), "\"Pending\"");
}

#[test]
fn status_parse_round_trips_every_variant() {
    for status in LoanStatus::ALL {
        assert_eq!(LoanStatus::parse(status.as_str()), Some(status));
        // The Display form is the wire form.
        assert_eq!(status.to_string(), status.as_str());
    }
}

#[test]
fn status_parse_rejects_unknown_and_miscased_values() {
    assert_eq!(LoanStatus::parse("Cancelled"), None);
    assert_eq!(LoanStatus::parse("pending"), None);
    assert_eq!(LoanStatus::parse("UnderReview"), None);
    assert_eq!(LoanStatus::parse(""), None);
}

#[test]
fn status_defaults_to_pending() {
    assert_eq!(LoanStatus::default(), LoanStatus::Pending);
}

// --- Aggregate construction ---

#[test]
fn into_application_sets_server_side_fields() {
    let user_id = Uuid::new_v4();
    let loan_id = Uuid::new_v4();
    let now = Utc.with_ymd_and_hms(2025, 7, 1, 9, 30, 0).unwrap();

    let loan = valid_request().into_application(user_id, loan_id, now);

    assert_eq!(loan.loan_id, loan_id);
    assert_eq!(loan.user_id, user_id);
    assert_eq!(loan.status, LoanStatus::Pending);
    assert_eq!(loan.application_date, now);
    assert_eq!(loan.last_updated, now);
    assert!(loan.status_history.is_empty());
    assert_eq!(loan.loan_amount, 50_000.0);
    assert_eq!(loan.loan_term, 24);
    assert_eq!(loan.purpose, "Home renovation project");
    assert_eq!(loan.existing_loans, "No");
    assert!(!loan.co_applicant);
}

#[test]
fn into_application_mirrors_tenure_from_term_when_absent() {
    let mut req = valid_request();
    req.loan_tenure = None;
    let loan = req.into_application(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
    assert_eq!(loan.loan_tenure, loan.loan_term);

    let mut req = valid_request();
    req.loan_tenure = Some(36.0);
    let loan = req.into_application(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
    assert_eq!(loan.loan_tenure, 36);
    assert_eq!(loan.loan_term, 24);
}

// --- Wire format ---

#[test]
fn aggregate_serializes_in_camel_case() {
    let loan = valid_request().into_application(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
    let value = serde_json::to_value(&loan).unwrap();
    let obj = value.as_object().unwrap();

    assert!(obj.contains_key("loanId"));
    assert!(obj.contains_key("userId"));
    assert!(obj.contains_key("applicationDate"));
    assert!(obj.contains_key("lastUpdated"));
    assert!(obj.contains_key("statusHistory"));
    assert!(obj.contains_key("loanAmount"));
    assert!(obj.contains_key("monthlyIncome"));
    assert!(obj.contains_key("employmentType"));
    assert!(obj.contains_key("processingInfo"));
    assert!(!obj.contains_key("loan_id"));

    // Unset optionals are omitted, not serialized as null.
    assert!(!obj.contains_key("emi"));
    assert!(!obj.contains_key("coApplicantDetails"));
}

#[test]
fn aggregate_document_round_trips_through_json() {
    let original = valid_request().into_application(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
    let document = serde_json::to_value(&original).unwrap();
    let decoded: LoanApplication = serde_json::from_value(document).unwrap();

    assert_eq!(decoded.loan_id, original.loan_id);
    assert_eq!(decoded.status, original.status);
    assert_eq!(decoded.loan_amount, original.loan_amount);
    assert_eq!(
        decoded.applicant_details.unwrap().email,
        original.applicant_details.unwrap().email
    );
}

#[test]
fn joined_view_flattens_the_loan_record() {
    let loan = valid_request().into_application(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
    let view = LoanJoinedView {
        loan,
        user_name: "Asha Verma".to_string(),
        user_email: "asha.verma@example.com".to_string(),
    };

    let value = serde_json::to_value(&view).unwrap();
    let obj = value.as_object().unwrap();

    // Loan fields and owner fields share one flat object.
    assert!(obj.contains_key("loanId"));
    assert_eq!(obj["userName"], "Asha Verma");
    assert_eq!(obj["userEmail"], "asha.verma@example.com");
    assert!(!obj.contains_key("loan"));
}

#[test]
fn create_request_tolerates_sparse_payloads() {
    let req: CreateLoanRequest = serde_json::from_str(r#"{"loanAmount": 50000}"#).unwrap();
    assert_eq!(req.loan_amount, Some(50_000.0));
    assert!(req.loan_term.is_none());
    assert!(req.purpose.is_none());
    assert!(req.applicant_details.is_none());
    assert!(req.references.is_empty());

    let empty: CreateLoanRequest = serde_json::from_str("{}").unwrap();
    assert!(empty.loan_amount.is_none());
}

#[test]
fn applicant_defaults_fill_nationality_and_country() {
    let req: CreateLoanRequest = serde_json::from_str(
        r#"{
            "applicantDetails": {
                "firstName": "Asha", "lastName": "Verma",
                "phone": "9876543210", "email": "asha@example.com"
            },
            "residentialAddress": {
                "addressLine1": "12 MG Road", "city": "Pune",
                "state": "Maharashtra", "postalCode": "411001"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(req.applicant_details.unwrap().nationality, "Indian");
    assert_eq!(req.residential_address.unwrap().country, "India");
}

// --- INR formatting ---

#[test]
fn format_inr_groups_thousands() {
    assert_eq!(format_inr(0.0), "₹0");
    assert_eq!(format_inr(999.0), "₹999");
    assert_eq!(format_inr(1000.0), "₹1,000");
    assert_eq!(format_inr(50_000.0), "₹50,000");
    assert_eq!(format_inr(1_250_000.0), "₹1,250,000");
    assert_eq!(format_inr(987_654_321.0), "₹987,654,321");
}

#[test]
fn format_inr_rounds_and_handles_negatives() {
    assert_eq!(format_inr(1234.56), "₹1,235");
    assert_eq!(format_inr(1234.4), "₹1,234");
    assert_eq!(format_inr(-50_000.0), "-₹50,000");
}
