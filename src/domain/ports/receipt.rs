//! Store acknowledgement types and the shared store error.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Failures raised by store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Store connection could not be established.
    #[error("store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("store query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Convenient result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Acknowledgement for update operations.
///
/// `matched_count == 0` is how the store reports an update against a missing
/// or non-matching document; callers treat it as an ordinary success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReceipt {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateReceipt {
    /// Acknowledgement for an update that matched nothing.
    pub fn none() -> Self {
        Self {
            matched_count: 0,
            modified_count: 0,
        }
    }

    /// Acknowledgement for an update applied to a single document.
    pub fn applied() -> Self {
        Self {
            matched_count: 1,
            modified_count: 1,
        }
    }

    /// Whether the update matched at least one document.
    pub fn matched(&self) -> bool {
        self.matched_count > 0
    }
}

/// Acknowledgement for insert operations.
///
/// `inserted_id` is `null` when the insert was skipped (duplicate email on
/// user registration); `message` explains why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertReceipt {
    pub inserted_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InsertReceipt {
    /// Acknowledgement for a stored document.
    pub fn inserted(id: Uuid) -> Self {
        Self {
            inserted_id: Some(id),
            message: None,
        }
    }

    /// Acknowledgement for a skipped insert.
    pub fn skipped(message: impl Into<String>) -> Self {
        Self {
            inserted_id: None,
            message: Some(message.into()),
        }
    }
}
