use crate::{
    error::{ApiError, FieldError},
    models::CreateLoanRequest,
};

/// Loan types accepted on submission.
pub const LOAN_TYPES: [&str; 7] = [
    "Personal Loan",
    "Home Loan",
    "Education Loan",
    "Vehicle Loan",
    "Business Loan",
    "Gold Loan",
    "Loan Against Property",
];

/// Employment types accepted on submission.
pub const EMPLOYMENT_TYPES: [&str; 6] = [
    "Salaried",
    "Self-employed",
    "Business",
    "Government",
    "Retired",
    "Student",
];

/// The six schema-required submission fields, in reporting order.
const REQUIRED_FIELDS: [&str; 6] = [
    "loanAmount",
    "loanTerm",
    "purpose",
    "monthlyIncome",
    "loanType",
    "employmentType",
];

/// Field Validator
///
/// Runs before loan creation only. Two stages, neither of which
/// short-circuits:
///
/// 1. Presence of the six required fields. Any absence rejects with
///    `MissingFields` carrying the exact set of absent names.
/// 2. Type/range/pattern rules over everything supplied. Every violation is
///    collected into an ordered `{field, message}` list and reported together
///    as `ValidationFailed`.
///
/// On any failure the create operation must not reach the store; the caller
/// gets the full list back.
pub fn validate_create_loan(req: &CreateLoanRequest) -> Result<(), ApiError> {
    log_received_fields(req);

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|f| is_field_missing(req, f))
        .map(|f| f.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::MissingFields { fields: missing });
    }

    let errors = collect_rule_violations(req);
    if !errors.is_empty() {
        return Err(ApiError::ValidationFailed { errors });
    }

    Ok(())
}

fn is_field_missing(req: &CreateLoanRequest, field: &str) -> bool {
    match field {
        "loanAmount" => req.loan_amount.is_none(),
        "loanTerm" => req.loan_term.is_none(),
        "purpose" => req.purpose.as_deref().is_none_or(|p| p.is_empty()),
        "monthlyIncome" => req.monthly_income.is_none(),
        "loanType" => req.loan_type.as_deref().is_none_or(|t| t.is_empty()),
        "employmentType" => req.employment_type.as_deref().is_none_or(|t| t.is_empty()),
        _ => false,
    }
}

/// Evaluates every rule and returns the full ordered violation list.
pub fn collect_rule_violations(req: &CreateLoanRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(amount) = req.loan_amount {
        if !(1000.0..=10_000_000.0).contains(&amount) {
            errors.push(FieldError::new(
                "loanAmount",
                "Loan amount must be between 1000 and 10000000",
            ));
        }
    }

    if let Some(term) = req.loan_term {
        if term.fract() != 0.0 {
            errors.push(FieldError::new("loanTerm", "Loan term must be an integer"));
        } else if !(6.0..=600.0).contains(&term) {
            errors.push(FieldError::new(
                "loanTerm",
                "Loan term must be between 6 and 600 months",
            ));
        }
    }

    if let Some(purpose) = req.purpose.as_deref() {
        let len = purpose.chars().count();
        if !(5..=500).contains(&len) {
            errors.push(FieldError::new(
                "purpose",
                "Purpose must be between 5 and 500 characters",
            ));
        }
    }

    if let Some(loan_type) = req.loan_type.as_deref() {
        if !LOAN_TYPES.contains(&loan_type) {
            errors.push(FieldError::new("loanType", "Invalid loan type"));
        }
    }

    if let Some(income) = req.monthly_income {
        if income < 5000.0 {
            errors.push(FieldError::new(
                "monthlyIncome",
                "Monthly income must be at least 5,000",
            ));
        }
    }

    if let Some(income) = req.annual_income {
        if income < 60_000.0 {
            errors.push(FieldError::new(
                "annualIncome",
                "Annual income must be at least 60,000",
            ));
        }
    }

    if let Some(score) = req.credit_score {
        if !(300.0..=900.0).contains(&score) {
            errors.push(FieldError::new(
                "creditScore",
                "Credit score must be between 300 and 900",
            ));
        }
    }

    if let Some(rate) = req.interest_rate {
        if !(6.0..=30.0).contains(&rate) {
            errors.push(FieldError::new(
                "interestRate",
                "Interest rate must be between 6 and 30",
            ));
        }
    }

    if let Some(employment_type) = req.employment_type.as_deref() {
        if !EMPLOYMENT_TYPES.contains(&employment_type) {
            errors.push(FieldError::new("employmentType", "Invalid employment type"));
        }
    }

    // Applicant identity and contact rules.
    match req.applicant_details.as_ref() {
        Some(details) => {
            if details.first_name.trim().is_empty() {
                errors.push(FieldError::new(
                    "applicantDetails.firstName",
                    "First name is required",
                ));
            }
            if details.last_name.trim().is_empty() {
                errors.push(FieldError::new(
                    "applicantDetails.lastName",
                    "Last name is required",
                ));
            }
            if details.email.trim().is_empty() {
                errors.push(FieldError::new(
                    "applicantDetails.email",
                    "Email is required",
                ));
            } else if !is_valid_email(&details.email) {
                errors.push(FieldError::new(
                    "applicantDetails.email",
                    "Email must be valid",
                ));
            }
            if details.phone.trim().is_empty() {
                errors.push(FieldError::new(
                    "applicantDetails.phone",
                    "Phone number is required",
                ));
            } else if !is_ten_digit_phone(&details.phone) {
                errors.push(FieldError::new(
                    "applicantDetails.phone",
                    "Phone number must be 10 digits",
                ));
            }
        }
        None => {
            errors.push(FieldError::new(
                "applicantDetails",
                "Applicant details are required",
            ));
        }
    }

    // Disbursement account rules.
    match req.bank_details.as_ref() {
        Some(bank) => {
            if bank.account_number.trim().is_empty() {
                errors.push(FieldError::new(
                    "bankDetails.accountNumber",
                    "Account number is required",
                ));
            }
            if bank.ifsc_code.trim().is_empty() {
                errors.push(FieldError::new(
                    "bankDetails.ifscCode",
                    "IFSC code is required",
                ));
            }
        }
        None => {
            errors.push(FieldError::new("bankDetails", "Bank details are required"));
        }
    }

    if let Some(ratio) = req.debt_to_income_ratio {
        if !(0.0..=100.0).contains(&ratio) {
            errors.push(FieldError::new(
                "debtToIncomeRatio",
                "Debt-to-income ratio must be between 0 and 100",
            ));
        }
    }

    errors
}

/// Minimal structural email check: one '@', non-empty local part, and a dot
/// somewhere after it in a non-empty domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.len() >= 3
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    }
}

fn is_ten_digit_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

/// Diagnostic record of what the submission actually contained. Mirrors the
/// operability logging the serving tier has always done for this form; debug
/// level so it stays out of production noise.
fn log_received_fields(req: &CreateLoanRequest) {
    tracing::debug!(
        loan_amount = ?req.loan_amount,
        loan_term = ?req.loan_term,
        loan_type = ?req.loan_type,
        has_applicant_details = req.applicant_details.is_some(),
        has_bank_details = req.bank_details.is_some(),
        has_employment_details = req.employment_details.is_some(),
        has_residential_address = req.residential_address.is_some(),
        "validating loan submission"
    );
}
