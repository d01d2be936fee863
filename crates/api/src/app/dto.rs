use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crewdesk_employees::{Employee, RegisterRequest, RoleName, UpdateRequest};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterEmployeeRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl From<RegisterEmployeeRequest> for RegisterRequest {
    fn from(value: RegisterEmployeeRequest) -> Self {
        RegisterRequest {
            username: value.username,
            password: value.password,
            email: value.email,
            roles: to_role_set(value.roles),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<UpdateEmployeeRequest> for UpdateRequest {
    fn from(value: UpdateEmployeeRequest) -> Self {
        UpdateRequest {
            username: value.username,
            password: value.password,
            email: value.email,
            roles: to_role_set(value.roles),
        }
    }
}

fn to_role_set(roles: Vec<String>) -> BTreeSet<RoleName> {
    roles.into_iter().map(RoleName::new).collect()
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl From<&Employee> for EmployeeResponse {
    fn from(value: &Employee) -> Self {
        EmployeeResponse {
            id: value.id.to_string(),
            username: value.username.as_str().to_string(),
            email: value.email.clone(),
            roles: value.roles.iter().map(|r| r.as_str().to_string()).collect(),
        }
    }
}
