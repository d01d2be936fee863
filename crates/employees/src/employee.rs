//! Employee record and role names.

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crewdesk_auth::Authority;
use crewdesk_core::{EmployeeId, Username};

/// Role granted to an employee (e.g. "ADMIN", "OPERATOR", "LEADER").
///
/// Opaque at this layer; a role becomes an [`Authority`] claim label verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleName(Cow<'static, str>);

impl RoleName {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RoleName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RoleName> for Authority {
    fn from(value: RoleName) -> Self {
        Authority::new(value.0)
    }
}

/// An employee record.
///
/// # Invariants
/// - `username` is unique across the store (enforced at registration).
/// - A registered employee holds at least one role.
/// - Deletion is soft: the record stays, `deleted` flips to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub username: Username,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: BTreeSet<RoleName>,
    pub deleted: bool,
}

impl Employee {
    /// Role labels as claim authorities, in canonical (sorted) order.
    pub fn authorities(&self) -> Vec<Authority> {
        self.roles.iter().cloned().map(Authority::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_maps_to_authority_verbatim() {
        let authority: Authority = RoleName::new("OPERATOR").into();
        assert_eq!(authority.as_str(), "OPERATOR");
    }

    #[test]
    fn serialized_employee_omits_password_hash() {
        let employee = Employee {
            id: EmployeeId::new(),
            username: Username::new("alice").unwrap(),
            email: "alice@example.com".to_string(),
            password_hash: "secret-hash".to_string(),
            roles: BTreeSet::from([RoleName::new("ADMIN")]),
            deleted: false,
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }
}
