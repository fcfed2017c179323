//! Authentication extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use std::future::{Ready, ready};
use std::sync::Arc;

use remark_core::ports::{AuthError, TokenClaims, TokenService};
use remark_shared::MessageResponse;

/// Legacy header carrying a bare token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated user identity extractor.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, user {}!", identity.user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let msg = match &self.0 {
            AuthError::MissingAuth => "No token, authorization denied",
            AuthError::TokenExpired | AuthError::InvalidToken(_) => "Token is not valid",
        };

        actix_web::HttpResponse::build(self.status_code()).json(MessageResponse::new(msg))
    }
}

/// Pull the raw token from `Authorization: Bearer` or the legacy header.
fn extract_token(req: &HttpRequest) -> Result<&str, AuthError> {
    if let Some(value) = req.headers().get(header::AUTHORIZATION) {
        let auth_str = value
            .to_str()
            .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

        return auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()));
    }

    match req.headers().get(AUTH_TOKEN_HEADER) {
        Some(value) => value
            .to_str()
            .map_err(|_| AuthError::InvalidToken("Invalid x-auth-token header".to_string())),
        None => Err(AuthError::MissingAuth),
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_service = match req.app_data::<actix_web::web::Data<Arc<dyn TokenService>>>() {
            Some(service) => service,
            None => {
                tracing::error!("TokenService not found in app data");
                return ready(Err(AuthenticationError(AuthError::InvalidToken(
                    "Server configuration error".to_string(),
                ))));
            }
        };

        let result = extract_token(req)
            .and_then(|token| token_service.validate_token(token))
            .map(Identity::from)
            .map_err(|e| {
                tracing::debug!("Rejected request: {}", e);
                AuthenticationError(e)
            });

        ready(result)
    }
}
