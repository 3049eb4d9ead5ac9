//! Identity extraction.
//!
//! A failed extraction is the login boundary: the response is a redirect to
//! the login route with the original destination in `next`, not an error
//! page.

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use quill_core::ports::{AuthError, TokenClaims, TokenService};

/// Where the login boundary lives.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Authenticated requester, decoded from the bearer token.
///
/// Handlers that take this parameter are never reached anonymously; the
/// extractor redirects those requests to the login route first.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
    pub username: String,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
        }
    }
}

fn claims_from(req: &HttpRequest) -> Result<TokenClaims, AuthError> {
    let token_service = req
        .app_data::<web::Data<Arc<dyn TokenService>>>()
        .ok_or_else(|| {
            tracing::error!("TokenService missing from app data");
            AuthError::InvalidToken("server configuration error".to_string())
        })?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AuthError::InvalidToken("expected a Bearer token".to_string()))?;

    token_service.validate_token(token)
}

/// Missing or invalid credentials on a protected route.
#[derive(Debug)]
pub struct LoginRedirect {
    next: String,
    reason: AuthError,
}

impl std::fmt::Display for LoginRedirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "login required: {}", self.reason)
    }
}

impl actix_web::ResponseError for LoginRedirect {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::FOUND
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        tracing::debug!(next = %self.next, reason = %self.reason, "Redirecting to login");

        actix_web::HttpResponse::Found()
            .insert_header((header::LOCATION, format!("{}?next={}", LOGIN_PATH, self.next)))
            .finish()
    }
}

impl FromRequest for Identity {
    type Error = LoginRedirect;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_from(req).map(Identity::from).map_err(|reason| LoginRedirect {
            next: req.path().to_string(),
            reason,
        }))
    }
}
