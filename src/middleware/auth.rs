use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::Role;
use crate::AppState;

/// Identity attached to the request once the bearer token checks out.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let Some(auth_header) = headers.get(AUTHORIZATION) else {
        return Err(Error::Unauthorized("missing authorization header".to_string()));
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Err(Error::Unauthorized("malformed authorization header".to_string()));
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err(Error::Unauthorized(
            "authorization scheme must be Bearer".to_string(),
        ));
    };
    Ok(token.trim())
}

pub async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let claims = match bearer_token(req.headers()).and_then(|token| state.tokens.verify(token)) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = %err, path = %req.uri().path(), "rejected request");
            return err.into_response();
        }
    };

    req.extensions_mut().insert(AuthUser {
        user_id: claims.sub,
        email: claims.email,
        role: claims.role,
    });
    next.run(req).await
}

async fn require_role(req: Request, next: Next, role: Role) -> Response {
    let Some(user) = req.extensions().get::<AuthUser>() else {
        return Error::Unauthorized("authentication required".to_string()).into_response();
    };
    if user.role != role {
        return Error::Forbidden(format!("access restricted to {} accounts", role))
            .into_response();
    }
    next.run(req).await
}

pub async fn require_job_seeker(req: Request, next: Next) -> Response {
    require_role(req, next, Role::JobSeeker).await
}

pub async fn require_employer(req: Request, next: Next) -> Response {
    require_role(req, next, Role::Employer).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")).unwrap(), "abc.def");
    }

    #[test]
    fn rejects_missing_or_foreign_scheme() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(Error::Unauthorized(_))
        ));
        assert!(matches!(
            bearer_token(&headers("Basic dXNlcjpwdw==")),
            Err(Error::Unauthorized(_))
        ));
        assert!(matches!(
            bearer_token(&headers("bearer abc")),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn rejects_non_utf8_header() {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xff").unwrap());
        assert!(matches!(bearer_token(&map), Err(Error::Unauthorized(_))));
    }
}
