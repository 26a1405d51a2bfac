//! `AdminAuth` extractor — verifies HTTP Basic credentials against the
//! admin identity gate and injects the admin context.
//!
//! Credentials are checked on every gated request; there is no token or
//! cookie session to manage or invalidate.

use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Basic;

use timepool_core::error::AppError;
use timepool_service::context::AdminContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted admin context available in admin-gated handlers.
#[derive(Debug, Clone)]
pub struct AdminAuth(pub AdminContext);

impl AdminAuth {
    /// Returns the inner `AdminContext`.
    pub fn context(&self) -> &AdminContext {
        &self.0
    }
}

impl std::ops::Deref for AdminAuth {
    type Target = AdminContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) = parts
            .extract::<TypedHeader<Authorization<Basic>>>()
            .await
            .map_err(|_| {
                ApiError::from(AppError::invalid_credentials(
                    "Admin credentials required (HTTP Basic)",
                ))
            })?;

        let identity = state
            .admin_gate
            .authenticate(basic.username(), basic.password())
            .await?;

        Ok(AdminAuth(AdminContext::from(identity)))
    }
}
