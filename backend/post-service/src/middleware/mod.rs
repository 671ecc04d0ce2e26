/// HTTP middleware for post-service
///
/// The request pipeline is an ordered list of guards: each layer either
/// passes the request through (inserting context into request extensions)
/// or short-circuits with a terminal error response. Handlers behind
/// `JwtAuth` can rely on a resolved caller identity being present.
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::error::AppError;

// =====================================================================
// JWT Authentication
// =====================================================================

/// Bearer token claims. `sub` carries the user id as a UUID string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Extracted caller identity stored in request extensions after auth.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Uuid);

/// Validate an HS256 bearer token and resolve the caller's user id.
pub fn decode_user_id(token: &str, key: &DecodingKey) -> Result<Uuid, AppError> {
    let data = decode::<Claims>(token, key, &Validation::new(Algorithm::HS256))
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    Uuid::parse_str(&data.claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid user ID".to_string()))
}

/// Actix middleware that gates a scope behind bearer authentication.
pub struct JwtAuth {
    key: Arc<DecodingKey>,
}

impl JwtAuth {
    pub fn new(key: Arc<DecodingKey>) -> Self {
        Self { key }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthService {
            service: Rc::new(service),
            key: self.key.clone(),
        }))
    }
}

pub struct JwtAuthService<S> {
    service: Rc<S>,
    key: Arc<DecodingKey>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let key = self.key.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| {
                    AppError::Unauthorized("Missing Authorization header".to_string())
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                AppError::Unauthorized("Invalid Authorization scheme".to_string())
            })?;

            let user_id = decode_user_id(token, &key)?;

            req.extensions_mut().insert(UserId(user_id));

            service.call(req).await
        })
    }
}

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<UserId>()
                .copied()
                .ok_or_else(|| AppError::Unauthorized("User ID missing".to_string()).into()),
        )
    }
}

// =====================================================================
// Request metrics
// =====================================================================

pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct MetricsMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let start = Instant::now();

        Box::pin(async move {
            let res = service.call(req).await;
            let elapsed = start.elapsed();

            let status = match &res {
                Ok(response) => response.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            crate::metrics::HTTP_REQUESTS_TOTAL
                .with_label_values(&[method.as_str(), status.as_str()])
                .inc();
            crate::metrics::HTTP_REQUEST_DURATION_SECONDS
                .with_label_values(&[method.as_str()])
                .observe(elapsed.as_secs_f64());

            tracing::debug!(%method, %path, status = status.as_u16(), elapsed_ms = elapsed.as_millis() as u64, "request completed");
            res
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &[u8] = b"test-secret";

    fn token_for(sub: &str, expires_in_secs: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: sub.to_string(),
            iat: now,
            exp: now + expires_in_secs,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[test]
    fn decodes_the_caller_id_from_a_valid_token() {
        let user = Uuid::new_v4();
        let key = DecodingKey::from_secret(SECRET);

        let decoded = decode_user_id(&token_for(&user.to_string(), 3600), &key).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn rejects_an_expired_token() {
        let user = Uuid::new_v4();
        let key = DecodingKey::from_secret(SECRET);

        let err = decode_user_id(&token_for(&user.to_string(), -3600), &key).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let user = Uuid::new_v4();
        let key = DecodingKey::from_secret(b"a-different-secret");

        let err = decode_user_id(&token_for(&user.to_string(), 3600), &key).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn rejects_a_subject_that_is_not_a_uuid() {
        let key = DecodingKey::from_secret(SECRET);

        let err = decode_user_id(&token_for("not-a-uuid", 3600), &key).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
