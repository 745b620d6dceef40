use crate::{
    auth::auth::AuthUser,
    error::{ApiError, is_unique_violation},
    model::department::Department,
};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartment {
    #[schema(example = "CW")]
    pub department_code: String,

    #[schema(example = "Carwash")]
    pub department_name: String,

    #[schema(example = 300000.0)]
    pub gross_salary: f64,

    /// Zero is a valid deduction; only absence is rejected.
    #[schema(example = 20000.0)]
    pub total_deduction: f64,
}

/// Create Department. Codes are immutable and departments are never deleted.
#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = CreateDepartment,
    responses(
        (status = 201, description = "Department created"),
        (status = 400, description = "Missing fields or duplicate code"),
        (status = 401)
    ),
    tag = "Department"
)]
pub async fn create_department(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateDepartment>,
) -> Result<HttpResponse, ApiError> {
    let code = payload.department_code.trim();
    let name = payload.department_name.trim();

    if code.is_empty() || name.is_empty() {
        return Err(ApiError::Validation("All fields are required".into()));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO departments
        (department_code, department_name, gross_salary, total_deduction)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(code)
    .bind(name)
    .bind(payload.gross_salary)
    .bind(payload.total_deduction)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            info!(user = %auth.username, code, "Department created");
            Ok(HttpResponse::Created().json(json!({
                "message": "Department created successfully"
            })))
        }
        Err(e) if is_unique_violation(&e) => {
            Err(ApiError::Conflict("Department code already exists".into()))
        }
        Err(e) => {
            error!(error = %e, "Failed to create department");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "All departments", body = [Department]),
        (status = 401)
    ),
    tag = "Department"
)]
pub async fn list_departments(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let departments = sqlx::query_as::<_, Department>(
        r#"
        SELECT department_code, department_name, gross_salary, total_deduction
        FROM departments
        "#,
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to fetch departments");
        ApiError::Internal
    })?;

    Ok(HttpResponse::Ok().json(departments))
}

#[utoipa::path(
    get,
    path = "/api/departments/{code}",
    params(("code", description = "Department code")),
    responses(
        (status = 200, description = "Department found", body = Department),
        (status = 404, description = "Department not found"),
        (status = 401)
    ),
    tag = "Department"
)]
pub async fn get_department(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let code = path.into_inner();

    let department = sqlx::query_as::<_, Department>(
        r#"
        SELECT department_code, department_name, gross_salary, total_deduction
        FROM departments
        WHERE department_code = ?
        "#,
    )
    .bind(&code)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, code, "Failed to fetch department");
        ApiError::Internal
    })?;

    match department {
        Some(d) => Ok(HttpResponse::Ok().json(d)),
        None => Err(ApiError::NotFound("Department not found".into())),
    }
}
