use serde::Deserialize;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RegisterReq {
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginReq {
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(FromRow)]
pub struct UserSql {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(FromRow)]
pub struct SessionSql {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    /// Unix seconds. Past this instant the session is dead.
    pub expires_at: i64,
}
