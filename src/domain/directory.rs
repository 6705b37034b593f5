//! Directory service: user records and the per-admin employee quota.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::ports::{
    InsertReceipt, OnboardingUpdate, ProfileUpdate, UpdateReceipt, UserFilter, UserStore,
};
use crate::domain::{Error, User};

/// Owns user records. Quota values are overwritten wholesale by admin
/// actions; nothing in this service consumes quota automatically.
pub struct Directory {
    users: Arc<dyn UserStore>,
}

impl Directory {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Record a user on first sign-in.
    ///
    /// A second registration for the same email is acknowledged as a skipped
    /// insert rather than an error.
    pub async fn register(&self, user: &User) -> Result<InsertReceipt, Error> {
        if self.users.find_by_email(&user.email).await?.is_some() {
            return Ok(InsertReceipt::skipped("user already exists"));
        }
        let id = self.users.insert(user).await?;
        Ok(InsertReceipt::inserted(id))
    }

    /// Raw lookup by unique email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        Ok(self.users.find_by_email(email).await?)
    }

    /// Users not yet onboarded onto any team.
    pub async fn list_unassigned(&self) -> Result<Vec<User>, Error> {
        let filter = UserFilter {
            team: Some(false),
            ..UserFilter::default()
        };
        Ok(self.users.list(filter).await?)
    }

    /// Employees onboarded under the given admin.
    pub async fn list_team(&self, admin_email: &str) -> Result<Vec<User>, Error> {
        let filter = UserFilter {
            have_admin: Some(admin_email.to_owned()),
            ..UserFilter::default()
        };
        Ok(self.users.list(filter).await?)
    }

    /// Overwrite both quota fields on an admin's record.
    ///
    /// No `remaining <= total` validation happens here; the caller owns that
    /// invariant. A missing email acknowledges as a zero-effect update.
    pub async fn extend_quota(
        &self,
        admin_email: &str,
        total: u32,
        remaining: u32,
    ) -> Result<UpdateReceipt, Error> {
        Ok(self.users.set_quota(admin_email, total, remaining).await?)
    }

    /// Overwrite only the remaining-quota field.
    pub async fn set_quota_remaining(
        &self,
        admin_email: &str,
        remaining: u32,
    ) -> Result<UpdateReceipt, Error> {
        Ok(self
            .users
            .set_quota_remaining(admin_email, remaining)
            .await?)
    }

    /// Apply an onboarding edit to the user with this id.
    pub async fn update_onboarding(
        &self,
        id: Uuid,
        update: &OnboardingUpdate,
    ) -> Result<UpdateReceipt, Error> {
        Ok(self.users.set_onboarding(id, update).await?)
    }

    /// Apply a profile edit to the user with this id.
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<UpdateReceipt, Error> {
        Ok(self.users.set_profile(id, update).await?)
    }
}
