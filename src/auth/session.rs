use actix_web::cookie::{Cookie, time::Duration};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::SessionSql;

pub const SESSION_COOKIE: &str = "epms_session";

/// Mints a session token bound to the user and stores the token → identity
/// mapping. The expiry is absolute: it is set once at login and never slides.
pub async fn create_session(
    pool: &SqlitePool,
    user_id: i64,
    username: &str,
    ttl_secs: i64,
) -> Result<String, sqlx::Error> {
    let token = Uuid::new_v4().to_string();
    let expires_at = Utc::now().timestamp() + ttl_secs;

    sqlx::query(
        r#"
        INSERT INTO sessions (token, user_id, username, expires_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&token)
    .bind(user_id)
    .bind(username)
    .bind(expires_at)
    .execute(pool)
    .await?;

    Ok(token)
}

/// Resolves a token to a live session. Expired rows are deleted on sight and
/// reported as absent.
pub async fn lookup(pool: &SqlitePool, token: &str) -> Result<Option<SessionSql>, sqlx::Error> {
    let session = sqlx::query_as::<_, SessionSql>(
        r#"
        SELECT token, user_id, username, expires_at
        FROM sessions
        WHERE token = ?
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    match session {
        Some(s) if s.expires_at > Utc::now().timestamp() => Ok(Some(s)),
        Some(s) => {
            sqlx::query("DELETE FROM sessions WHERE token = ?")
                .bind(&s.token)
                .execute(pool)
                .await?;
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Idempotent: revoking an unknown token is a no-op.
pub async fn revoke(pool: &SqlitePool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;

    Ok(())
}

pub fn session_cookie(token: &str, ttl_secs: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_owned())
        .path("/")
        .http_only(true)
        .max_age(Duration::seconds(ttl_secs))
        .finish()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .finish()
}
