//! Directory user records.
//!
//! A user is created on first sign-in and never deleted by this service.
//! Admin users carry the employee quota pair; employee users carry the
//! organisation linkage (`haveAdmin`) assigned during onboarding.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Role stored against a directory user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Admin,
}

/// Directory user record.
///
/// Wire contract: camelCase fields, the quota pair present on admins only,
/// `haveAdmin` holding the owning admin's email for onboarded employees.
///
/// ## Invariants
/// - `email` is unique within the directory; a second insert for the same
///   email is acknowledged as a no-op.
/// - `employee_limit_remaining <= employee_limit_total` is a caller-maintained
///   invariant: quota updates overwrite both fields wholesale and the
///   directory does not re-validate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Email of the admin whose organisation this employee belongs to.
    #[serde(default)]
    pub have_admin: Option<String>,
    /// Whether the user has been onboarded onto a team.
    #[serde(default)]
    pub team: bool,
    #[serde(default)]
    pub companylogo: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub employee_limit_total: Option<u32>,
    #[serde(default)]
    pub employee_limit_remaining: Option<u32>,
}

impl User {
    /// Whether this record carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
