use crate::{
    auth::{
        password::{hash_password, verify_password},
        session,
    },
    config::Config,
    error::{ApiError, is_unique_violation},
    models::{LoginReq, RegisterReq, UserSql},
};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

/// Register a new user. Registration is unrestricted; accounts are created
/// once and never updated or deleted by this system.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Missing fields or username already exists")
    ),
    tag = "Auth"
)]
pub async fn register(
    user: web::Json<RegisterReq>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let username = user.username.trim();

    if username.is_empty() || user.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".into(),
        ));
    }

    let taken = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE username = ? LIMIT 1)",
    )
    .bind(username)
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to check username availability");
        ApiError::Internal
    })?;

    if taken {
        return Err(ApiError::Conflict("Username already exists".into()));
    }

    let hashed = hash_password(&user.password).map_err(|e| {
        error!(error = %e, "Failed to hash password");
        ApiError::Internal
    })?;

    let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind(username)
        .bind(&hashed)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(_) => {
            info!(username, "User registered");
            Ok(HttpResponse::Created().json(json!({
                "message": "User registered successfully"
            })))
        }
        // Lost the race against a concurrent register for the same name.
        Err(e) if is_unique_violation(&e) => {
            Err(ApiError::Conflict("Username already exists".into()))
        }
        Err(e) => {
            error!(error = %e, "Failed to register user");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Login successful, session cookie set"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_login", skip(pool, config, user), fields(username = %user.username))]
pub async fn login(
    user: web::Json<LoginReq>,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    if user.username.trim().is_empty() || user.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".into(),
        ));
    }

    debug!("Fetching user from database");

    let db_user = sqlx::query_as::<_, UserSql>(
        r#"
        SELECT id, username, password
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(user.username.trim())
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Database error while fetching user");
        ApiError::Internal
    })?;

    let db_user = match db_user {
        Some(u) => u,
        None => {
            info!("Invalid credentials: user not found");
            return Err(ApiError::Auth("Invalid credentials".into()));
        }
    };

    if verify_password(&user.password, &db_user.password).is_err() {
        info!("Invalid credentials: password mismatch");
        return Err(ApiError::Auth("Invalid credentials".into()));
    }

    let token = session::create_session(
        pool.get_ref(),
        db_user.id,
        &db_user.username,
        config.session_ttl_secs,
    )
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to store session");
        ApiError::Internal
    })?;

    info!("Login successful");

    Ok(HttpResponse::Ok()
        .cookie(session::session_cookie(&token, config.session_ttl_secs))
        .json(json!({
            "message": "Login successful",
            "username": db_user.username
        })))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Session revoked, cookie cleared")),
    tag = "Auth"
)]
pub async fn logout(
    req: HttpRequest,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    if let Some(cookie) = req.cookie(session::SESSION_COOKIE) {
        session::revoke(pool.get_ref(), cookie.value())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to revoke session");
                ApiError::Internal
            })?;
    }

    Ok(HttpResponse::Ok()
        .cookie(session::clear_session_cookie())
        .json(json!({ "message": "Logged out successfully" })))
}

/// Reports whether the caller holds a live session. Public: an anonymous
/// caller gets `isAuthenticated: false`, not a 401.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses((status = 200, description = "Session state")),
    tag = "Auth"
)]
pub async fn session_check(
    req: HttpRequest,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let token = match req.cookie(session::SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_owned(),
        None => return Ok(HttpResponse::Ok().json(json!({ "isAuthenticated": false }))),
    };

    let found = session::lookup(pool.get_ref(), &token).await.map_err(|e| {
        error!(error = %e, "Failed to look up session");
        ApiError::Internal
    })?;

    match found {
        Some(s) => Ok(HttpResponse::Ok().json(json!({
            "isAuthenticated": true,
            "username": s.username
        }))),
        None => Ok(HttpResponse::Ok().json(json!({ "isAuthenticated": false }))),
    }
}
