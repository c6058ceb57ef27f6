//! Bearer-token extractors for axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use hotelhub_app::ports::{AuditSink, Authenticator, LogRepository, RoomRepository};
use hotelhub_domain::error::AuthError;
use hotelhub_domain::principal::{Principal, Role};

use crate::error::ApiError;
use crate::state::AppState;

/// Principal extracted from an `Authorization: Bearer <token>` header.
///
/// Rejects with 401 when the header is missing, malformed or the token does
/// not verify.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl<RR, LR, AS, AU> FromRequestParts<AppState<RR, LR, AS, AU>> for AuthUser
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<RR, LR, AS, AU>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingCredentials)?;

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MalformedCredentials)?;

        let principal = state.authenticator.authenticate(token)?;
        Ok(Self(principal))
    }
}

/// Principal holding the `admin` role. Rejects with 403 otherwise.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Principal);

impl<RR, LR, AS, AU> FromRequestParts<AppState<RR, LR, AS, AU>> for AdminUser
where
    RR: RoomRepository + Send + Sync + 'static,
    LR: LogRepository + Send + Sync + 'static,
    AS: AuditSink + Send + Sync + 'static,
    AU: Authenticator + Send + Sync + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<RR, LR, AS, AU>,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(principal) = AuthUser::from_request_parts(parts, state).await?;
        principal.require(Role::Admin)?;
        Ok(Self(principal))
    }
}
