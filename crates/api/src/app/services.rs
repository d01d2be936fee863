//! Collaborator wiring for the HTTP application.

use std::sync::Arc;

use crewdesk_auth::TokenIssuer;
use crewdesk_employees::{BcryptHasher, EmployeeDirectory, InMemoryEmployeeStore};

use crate::app::AppConfig;

/// Services shared by all request handlers.
pub struct AppServices {
    pub directory: EmployeeDirectory,
}

/// Wire the directory service from explicit configuration.
///
/// The in-memory store stands in for the relational collaborator; swapping
/// in a database-backed `EmployeeStore` happens here and nowhere else.
pub fn build_services(config: AppConfig) -> AppServices {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let hasher = Arc::new(BcryptHasher::with_cost(config.bcrypt_cost));
    let issuer = TokenIssuer::new(config.key);

    AppServices {
        directory: EmployeeDirectory::new(store, hasher, issuer),
    }
}
