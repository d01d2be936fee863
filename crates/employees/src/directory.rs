//! Employee account workflows: register, login, update, delete.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crewdesk_auth::{AuthError, TokenIssuer};
use crewdesk_core::{DomainError, EmployeeId, Username};

use crate::employee::{Employee, RoleName};
use crate::password::{PasswordHashError, PasswordHasher};
use crate::store::EmployeeStore;

/// Registration input for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub roles: BTreeSet<RoleName>,
}

/// Update input. `None` fields are left untouched; a non-empty role set
/// replaces the previous set wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub roles: BTreeSet<RoleName>,
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("username '{0}' is taken")]
    UsernameTaken(String),

    #[error("an employee must have at least one role")]
    NoRoles,

    #[error("employee not found")]
    NotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Password(#[from] PasswordHashError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Employee directory service.
///
/// Collaborators are explicit constructor parameters; there is no ambient
/// container. The store and hasher are trait objects so tests and real
/// deployments wire different implementations.
pub struct EmployeeDirectory {
    store: Arc<dyn EmployeeStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: TokenIssuer,
}

impl EmployeeDirectory {
    pub fn new(
        store: Arc<dyn EmployeeStore>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: TokenIssuer,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
        }
    }

    /// Register a batch of employees.
    ///
    /// Each request must carry an unused username and at least one role;
    /// both checks run before anything is persisted or any token issued.
    pub fn register(&self, requests: Vec<RegisterRequest>) -> Result<Vec<Employee>, DirectoryError> {
        requests
            .into_iter()
            .map(|req| self.register_one(req))
            .collect()
    }

    /// Register employees outside the authenticated flow (bootstrap path).
    ///
    /// Same funnel as [`register`](Self::register); the HTTP layer decides
    /// which route requires an authenticated admin.
    pub fn register_admin(
        &self,
        requests: Vec<RegisterRequest>,
    ) -> Result<Vec<Employee>, DirectoryError> {
        self.register(requests)
    }

    /// Verify credentials and issue a signed access token.
    ///
    /// `now` is the per-call issuance instant; the expiration window is
    /// always computed relative to it.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<String, DirectoryError> {
        let employee = self
            .store
            .find_by_username(username)
            .filter(|e| !e.deleted)
            .ok_or(DirectoryError::InvalidCredentials)?;

        if !self.hasher.verify(password, &employee.password_hash) {
            tracing::warn!(username, "login rejected: bad password");
            return Err(DirectoryError::InvalidCredentials);
        }

        let token = self
            .issuer
            .issue(employee.username.as_str(), employee.roles.iter(), now)?;

        tracing::info!(username, "login succeeded");
        Ok(token)
    }

    /// Update an employee record.
    pub fn update(&self, id: EmployeeId, request: UpdateRequest) -> Result<Employee, DirectoryError> {
        let mut employee = self
            .store
            .get(id)
            .filter(|e| !e.deleted)
            .ok_or(DirectoryError::NotFound)?;

        if let Some(username) = request.username {
            let username = Username::new(username)?;
            if let Some(existing) = self.store.find_by_username(username.as_str()) {
                if existing.id != id {
                    return Err(DirectoryError::UsernameTaken(username.as_str().to_string()));
                }
            }
            employee.username = username;
        }

        if let Some(password) = request.password {
            employee.password_hash = self.hasher.hash(&password)?;
        }

        if let Some(email) = request.email {
            employee.email = email;
        }

        // An empty role set means "keep the current roles"; a non-empty set
        // replaces them wholesale.
        if !request.roles.is_empty() {
            employee.roles = request.roles;
        }

        self.store.upsert(employee.clone());
        tracing::info!(employee_id = %id, "employee updated");
        Ok(employee)
    }

    /// Soft-delete an employee. The record stays for audit; login stops.
    pub fn delete(&self, id: EmployeeId) -> Result<EmployeeId, DirectoryError> {
        let mut employee = self
            .store
            .get(id)
            .filter(|e| !e.deleted)
            .ok_or(DirectoryError::NotFound)?;

        employee.deleted = true;
        self.store.upsert(employee);
        tracing::info!(employee_id = %id, "employee soft-deleted");
        Ok(id)
    }

    fn register_one(&self, request: RegisterRequest) -> Result<Employee, DirectoryError> {
        let username = Username::new(request.username)?;

        if self.store.find_by_username(username.as_str()).is_some() {
            return Err(DirectoryError::UsernameTaken(
                username.as_str().to_string(),
            ));
        }

        if request.roles.is_empty() {
            return Err(DirectoryError::NoRoles);
        }

        let employee = Employee {
            id: EmployeeId::new(),
            username,
            email: request.email,
            password_hash: self.hasher.hash(&request.password)?,
            roles: request.roles,
            deleted: false,
        };

        self.store.upsert(employee.clone());
        tracing::info!(username = %employee.username, "employee registered");
        Ok(employee)
    }
}
