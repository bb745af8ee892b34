#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use loan_portal::{
    AppState,
    config::AppConfig,
    models::{
        ApplicantDetails, BankDetails, CreateLoanRequest, LoanApplication, LoanStatus, User,
    },
    repository::{Repository, RepositoryState, StoreError, StoreResult},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use uuid::Uuid;

/// MemoryRepository
///
/// In-memory implementation of the `Repository` trait. Handlers only know
/// the trait, so tests drive them against this instead of Postgres. The
/// insert counter lets tests assert that rejected submissions never reach
/// the store.
#[derive(Default)]
pub struct MemoryRepository {
    pub loans: Mutex<Vec<LoanApplication>>,
    pub users: Mutex<Vec<User>>,
    pub insert_calls: AtomicUsize,
    /// When set, every insert fails as a duplicate-key collision.
    pub fail_inserts_as_duplicate: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub fn seed_loan(&self, loan: LoanApplication) {
        self.loans.lock().unwrap().push(loan);
    }

    pub fn inserts(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    fn sorted_desc(mut loans: Vec<LoanApplication>) -> Vec<LoanApplication> {
        loans.sort_by(|a, b| b.application_date.cmp(&a.application_date));
        loans
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn insert_loan(&self, loan: &LoanApplication) -> StoreResult<()> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_inserts_as_duplicate {
            return Err(StoreError::Duplicate);
        }

        let mut loans = self.loans.lock().unwrap();
        if loans.iter().any(|l| l.loan_id == loan.loan_id) {
            return Err(StoreError::Duplicate);
        }
        loans.push(loan.clone());
        Ok(())
    }

    async fn loans_for_user(&self, user_id: Uuid) -> StoreResult<Vec<LoanApplication>> {
        let loans = self
            .loans
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect();
        Ok(Self::sorted_desc(loans))
    }

    async fn all_loans(&self) -> StoreResult<Vec<LoanApplication>> {
        Ok(Self::sorted_desc(self.loans.lock().unwrap().clone()))
    }

    async fn loan_by_id(&self, loan_id: Uuid) -> StoreResult<Option<LoanApplication>> {
        Ok(self
            .loans
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.loan_id == loan_id)
            .cloned())
    }

    async fn update_loan_status(
        &self,
        loan_id: Uuid,
        status: LoanStatus,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<Option<LoanApplication>> {
        let mut loans = self.loans.lock().unwrap();
        match loans.iter_mut().find(|l| l.loan_id == loan_id) {
            Some(loan) => {
                loan.status = status;
                loan.last_updated = updated_at;
                Ok(Some(loan.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_loan(&self, loan_id: Uuid) -> StoreResult<bool> {
        let mut loans = self.loans.lock().unwrap();
        let before = loans.len();
        loans.retain(|l| l.loan_id != loan_id);
        Ok(loans.len() < before)
    }

    async fn count_users(&self) -> StoreResult<i64> {
        Ok(self.users.lock().unwrap().len() as i64)
    }

    async fn count_loans(&self) -> StoreResult<i64> {
        Ok(self.loans.lock().unwrap().len() as i64)
    }

    async fn count_loans_with_status(&self, status: LoanStatus) -> StoreResult<i64> {
        Ok(self
            .loans
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.status == status)
            .count() as i64)
    }

    async fn total_loan_amount(&self) -> StoreResult<f64> {
        Ok(self.loans.lock().unwrap().iter().map(|l| l.loan_amount).sum())
    }

    async fn loan_count_for_user(&self, user_id: Uuid) -> StoreResult<i64> {
        Ok(self
            .loans
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == user_id)
            .count() as i64)
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn recent_users(&self, limit: i64) -> StoreResult<Vec<User>> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        users.truncate(limit as usize);
        Ok(users)
    }
}

/// Builds an AppState over the given mock repository with the default test
/// configuration (known signing secret).
pub fn test_state(repo: Arc<MemoryRepository>) -> AppState {
    AppState {
        repo: repo as RepositoryState,
        config: AppConfig::default(),
    }
}

/// The worked example submission: clears every validation rule.
pub fn valid_request() -> CreateLoanRequest {
    CreateLoanRequest {
        loan_amount: Some(50_000.0),
        loan_term: Some(24.0),
        purpose: Some("Home renovation project".to_string()),
        monthly_income: Some(40_000.0),
        loan_type: Some("Personal Loan".to_string()),
        employment_type: Some("Salaried".to_string()),
        annual_income: Some(480_000.0),
        credit_score: Some(720.0),
        applicant_details: Some(ApplicantDetails {
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            phone: "9876543210".to_string(),
            email: "asha.verma@example.com".to_string(),
            ..ApplicantDetails::default()
        }),
        bank_details: Some(BankDetails {
            account_number: "001234567890".to_string(),
            ifsc_code: "HDFC0001234".to_string(),
            bank_name: Some("HDFC Bank".to_string()),
            account_holder_name: Some("Asha Verma".to_string()),
            ..BankDetails::default()
        }),
        ..CreateLoanRequest::default()
    }
}

/// Directory entry helper; `created_days_ago` spaces out creation times for
/// recency ordering tests.
pub fn seed_user(id: Uuid, name: &str, email: &str, role: &str, created_days_ago: i64) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap()
            - chrono::Duration::days(created_days_ago),
    }
}
