//! Request context carrying the authenticated admin identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use timepool_entity::admin::AdminIdentity;

/// Context for an admin-gated request.
///
/// Built by the HTTP layer after credential verification and passed
/// explicitly into service methods, so every administrative operation
/// knows *who* is acting without any ambient login state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminContext {
    /// The authenticated admin's credential ID.
    pub admin_id: Uuid,
    /// The admin's login name.
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl AdminContext {
    /// Creates a new admin context.
    pub fn new(admin_id: Uuid, username: String) -> Self {
        Self {
            admin_id,
            username,
            request_time: Utc::now(),
        }
    }
}

impl From<AdminIdentity> for AdminContext {
    fn from(identity: AdminIdentity) -> Self {
        Self::new(identity.id, identity.username)
    }
}
