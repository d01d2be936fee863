//! `crewdesk-employees` — employee/role model and account workflows.
//!
//! Registration, login, update, and soft deletion for employee records. The
//! persistence and password-hashing boundaries are traits so the relational
//! store (and its transaction rules) stay an external collaborator.

pub mod directory;
pub mod employee;
pub mod password;
pub mod store;

pub use directory::{
    DirectoryError, EmployeeDirectory, RegisterRequest, UpdateRequest,
};
pub use employee::{Employee, RoleName};
pub use password::{BcryptHasher, DEFAULT_COST, PasswordHashError, PasswordHasher};
pub use store::{EmployeeStore, InMemoryEmployeeStore};
