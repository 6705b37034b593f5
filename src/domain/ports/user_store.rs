//! Port abstraction for directory user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::User;

use super::{StoreResult, UpdateReceipt};

/// AND-composed filter over directory users.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// Match users onboarded under this admin's email.
    pub have_admin: Option<String>,
    /// Match on the team-onboarding flag.
    pub team: Option<bool>,
}

/// Fields overwritten together by an onboarding edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingUpdate {
    pub have_admin: Option<String>,
    pub companylogo: Option<String>,
    pub team: bool,
}

/// Fields overwritten together by a profile edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub dob: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Store a user document and return its identifier.
    async fn insert(&self, user: &User) -> StoreResult<Uuid>;

    /// Fetch a user by unique email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// List users matching the filter.
    async fn list(&self, filter: UserFilter) -> StoreResult<Vec<User>>;

    /// Overwrite both quota fields on the user with this email.
    async fn set_quota(&self, email: &str, total: u32, remaining: u32)
    -> StoreResult<UpdateReceipt>;

    /// Overwrite only the remaining-quota field.
    async fn set_quota_remaining(&self, email: &str, remaining: u32) -> StoreResult<UpdateReceipt>;

    /// Overwrite the onboarding fields on the user with this id.
    async fn set_onboarding(&self, id: Uuid, update: &OnboardingUpdate)
    -> StoreResult<UpdateReceipt>;

    /// Overwrite the profile fields on the user with this id.
    async fn set_profile(&self, id: Uuid, update: &ProfileUpdate) -> StoreResult<UpdateReceipt>;
}
