use crate::{
    auth::auth::AuthUser,
    error::{ApiError, is_foreign_key_violation},
    model::{employee::Employee, gender::Gender},
};
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{error, info};
use utoipa::ToSchema;

/// All eight fields are required at the API even though the department
/// reference is nullable in storage.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    #[schema(example = "John")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "KN 5 Ave, Kigali")]
    pub address: String,

    #[schema(example = "Cashier")]
    pub position: String,

    #[schema(example = "+250788123456")]
    pub telephone: String,

    pub gender: Gender,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub hired_date: NaiveDate,

    #[schema(example = "CW")]
    pub department_code: String,
}

/// Create Employee. Employees are never deleted by the system.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created, returns the new employee number"),
        (status = 400, description = "Missing fields"),
        (status = 404, description = "Referenced department does not exist"),
        (status = 401)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let required = [
        payload.first_name.trim(),
        payload.last_name.trim(),
        payload.address.trim(),
        payload.position.trim(),
        payload.telephone.trim(),
        payload.department_code.trim(),
    ];

    if required.iter().any(|f| f.is_empty()) {
        return Err(ApiError::Validation("All fields are required".into()));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO employees
        (first_name, last_name, address, position, telephone, gender, hired_date, department_code)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(payload.first_name.trim())
    .bind(payload.last_name.trim())
    .bind(payload.address.trim())
    .bind(payload.position.trim())
    .bind(payload.telephone.trim())
    .bind(payload.gender.to_string())
    .bind(payload.hired_date)
    .bind(payload.department_code.trim())
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(done) => {
            let employee_number = done.last_insert_rowid();
            info!(user = %auth.username, employee_number, "Employee created");
            Ok(HttpResponse::Created().json(json!({
                "message": "Employee created successfully",
                "employeeNumber": employee_number
            })))
        }
        Err(e) if is_foreign_key_violation(&e) => {
            Err(ApiError::NotFound("Department not found".into()))
        }
        Err(e) => {
            error!(error = %e, "Failed to create employee");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees with department names", body = [Employee]),
        (status = 401)
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = sqlx::query_as::<_, Employee>(
        r#"
        SELECT e.employee_number, e.first_name, e.last_name, e.address, e.position,
               e.telephone, e.gender, e.hired_date, e.department_code, d.department_name
        FROM employees e
        LEFT JOIN departments d ON e.department_code = d.department_code
        "#,
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to fetch employees");
        ApiError::Internal
    })?;

    Ok(HttpResponse::Ok().json(employees))
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id", description = "Employee number")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found"),
        (status = 401)
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee_number = path.into_inner();

    let employee = sqlx::query_as::<_, Employee>(
        r#"
        SELECT e.employee_number, e.first_name, e.last_name, e.address, e.position,
               e.telephone, e.gender, e.hired_date, e.department_code, d.department_name
        FROM employees e
        LEFT JOIN departments d ON e.department_code = d.department_code
        WHERE e.employee_number = ?
        "#,
    )
    .bind(employee_number)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, employee_number, "Failed to fetch employee");
        ApiError::Internal
    })?;

    match employee {
        Some(emp) => Ok(HttpResponse::Ok().json(emp)),
        None => Err(ApiError::NotFound("Employee not found".into())),
    }
}
