//! Shared fixtures for handler tests.

use actix_web::web;
use serde_json::json;

use crate::domain::{Role, User};

use super::state::HttpState;

pub const TEST_SECRET: &[u8] = b"handler-test-secret";

/// Memory-backed state wrapped for `App::app_data`.
pub fn test_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::for_tests(TEST_SECRET))
}

/// Access token for the given email, signed with the test secret.
pub fn token_for(state: &HttpState, email: &str) -> String {
    state
        .gate
        .issue(&json!({ "email": email }))
        .expect("issue test token")
}

pub fn user_with_role(email: &str, role: Role) -> User {
    User {
        id: uuid::Uuid::new_v4(),
        email: email.into(),
        name: Some("Test User".into()),
        role,
        have_admin: None,
        team: false,
        companylogo: None,
        dob: None,
        employee_limit_total: None,
        employee_limit_remaining: None,
    }
}

/// Register an admin in the directory and return a token for them.
pub async fn seed_admin(state: &HttpState, email: &str) -> String {
    state
        .directory
        .register(&user_with_role(email, Role::Admin))
        .await
        .expect("seed admin");
    token_for(state, email)
}

/// Register an employee in the directory and return a token for them.
pub async fn seed_employee(state: &HttpState, email: &str) -> String {
    state
        .directory
        .register(&user_with_role(email, Role::Employee))
        .await
        .expect("seed employee");
    token_for(state, email)
}

/// `Bearer` authorisation header tuple for a token.
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
