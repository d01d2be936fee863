//! Employee persistence boundary.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crewdesk_core::EmployeeId;

use crate::employee::Employee;

/// Storage abstraction for employee records.
///
/// The relational store (queries, unit-of-work boundaries, cascade rules) is
/// an external collaborator; this trait is the seam it plugs into.
pub trait EmployeeStore: Send + Sync {
    fn get(&self, id: EmployeeId) -> Option<Employee>;
    fn find_by_username(&self, username: &str) -> Option<Employee>;
    fn upsert(&self, employee: Employee);
    fn list(&self) -> Vec<Employee>;
}

impl<S> EmployeeStore for Arc<S>
where
    S: EmployeeStore + ?Sized,
{
    fn get(&self, id: EmployeeId) -> Option<Employee> {
        (**self).get(id)
    }

    fn find_by_username(&self, username: &str) -> Option<Employee> {
        (**self).find_by_username(username)
    }

    fn upsert(&self, employee: Employee) {
        (**self).upsert(employee)
    }

    fn list(&self) -> Vec<Employee> {
        (**self).list()
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    inner: RwLock<HashMap<EmployeeId, Employee>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn get(&self, id: EmployeeId) -> Option<Employee> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn find_by_username(&self, username: &str) -> Option<Employee> {
        let map = self.inner.read().ok()?;
        map.values()
            .find(|e| e.username.as_str() == username)
            .cloned()
    }

    fn upsert(&self, employee: Employee) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(employee.id, employee);
        }
    }

    fn list(&self) -> Vec<Employee> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }
}
