use crate::auth::auth::AuthUser;
use crate::auth::session;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::error;

/// Session gate. Every route behind this middleware requires a live session:
/// the cookie token is resolved against the session store and the resulting
/// identity is passed along in the request extensions.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let pool = req
        .app_data::<Data<SqlitePool>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App state missing"))?
        .clone();

    let token = match req.cookie(session::SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_owned(),
        None => return unauthorized(req, "Authentication required"),
    };

    let found = match session::lookup(pool.get_ref(), &token).await {
        Ok(found) => found,
        Err(e) => {
            error!(error = %e, "Failed to look up session");
            return Err(actix_web::error::ErrorInternalServerError("Internal Server Error"));
        }
    };

    match found {
        Some(s) => {
            req.extensions_mut().insert(AuthUser {
                user_id: s.user_id,
                username: s.username,
            });
            next.call(req).await
        }
        None => unauthorized(req, "Invalid or expired session"),
    }
}

fn unauthorized(req: ServiceRequest, message: &str) -> Result<ServiceResponse<BoxBody>, Error> {
    let resp = HttpResponse::Unauthorized().json(json!({ "error": message }));
    Ok(req.into_response(resp.map_into_boxed_body()))
}
