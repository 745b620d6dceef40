use crate::{
    auth::auth::AuthUser,
    error::{ApiError, is_foreign_key_violation},
    model::salary::Salary,
    payroll::{self, PayrollEntry},
};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};

/// Net salary is derived server-side on every write; the client never sends
/// one. Multiple rows per (employee, month) are allowed.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInput {
    #[schema(example = 1)]
    pub employee_number: i64,

    #[schema(example = 300000.0)]
    pub gross_salary: f64,

    /// Zero is a valid deduction; only absence is rejected.
    #[schema(example = 20000.0)]
    pub total_deduction: f64,

    #[schema(example = "2024-01")]
    pub month_of_payment: String,
}

#[derive(Deserialize, IntoParams)]
pub struct PayrollQuery {
    /// Month tag, matched by exact string equality. Absent means all months.
    pub month: Option<String>,
}

const SALARY_SELECT: &str = r#"
    SELECT s.salary_id, s.employee_number, s.gross_salary, s.total_deduction,
           s.net_salary, s.month_of_payment,
           e.first_name, e.last_name, e.position, d.department_name
    FROM salaries s
    JOIN employees e ON s.employee_number = e.employee_number
    JOIN departments d ON e.department_code = d.department_code
"#;

#[utoipa::path(
    post,
    path = "/api/salaries",
    request_body = SalaryInput,
    responses(
        (status = 201, description = "Salary created, returns the id and computed net"),
        (status = 400, description = "Missing fields"),
        (status = 404, description = "Referenced employee does not exist"),
        (status = 401)
    ),
    tag = "Salary"
)]
pub async fn create_salary(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    payload: web::Json<SalaryInput>,
) -> Result<HttpResponse, ApiError> {
    let month = payload.month_of_payment.trim();

    if month.is_empty() {
        return Err(ApiError::Validation("All fields are required".into()));
    }

    let net_salary = payroll::derive_net_salary(payload.gross_salary, payload.total_deduction);

    let result = sqlx::query(
        r#"
        INSERT INTO salaries
        (employee_number, gross_salary, total_deduction, net_salary, month_of_payment)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(payload.employee_number)
    .bind(payload.gross_salary)
    .bind(payload.total_deduction)
    .bind(net_salary)
    .bind(month)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(done) => {
            let salary_id = done.last_insert_rowid();
            info!(user = %auth.username, salary_id, month, "Salary record created");
            Ok(HttpResponse::Created().json(json!({
                "message": "Salary record created successfully",
                "salaryId": salary_id,
                "netSalary": net_salary
            })))
        }
        Err(e) if is_foreign_key_violation(&e) => {
            Err(ApiError::NotFound("Employee not found".into()))
        }
        Err(e) => {
            error!(error = %e, "Failed to create salary record");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/salaries",
    responses(
        (status = 200, description = "All salary records with employee and department context",
         body = [Salary]),
        (status = 401)
    ),
    tag = "Salary"
)]
pub async fn list_salaries(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let sql = format!("{SALARY_SELECT} ORDER BY s.month_of_payment DESC, e.first_name");

    let salaries = sqlx::query_as::<_, Salary>(&sql)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch salaries");
            ApiError::Internal
        })?;

    Ok(HttpResponse::Ok().json(salaries))
}

#[utoipa::path(
    get,
    path = "/api/salaries/{id}",
    params(("id", description = "Salary id")),
    responses(
        (status = 200, description = "Salary record found", body = Salary),
        (status = 404, description = "Salary record not found"),
        (status = 401)
    ),
    tag = "Salary"
)]
pub async fn get_salary(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let salary_id = path.into_inner();
    let sql = format!("{SALARY_SELECT} WHERE s.salary_id = ?");

    let salary = sqlx::query_as::<_, Salary>(&sql)
        .bind(salary_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, salary_id, "Failed to fetch salary record");
            ApiError::Internal
        })?;

    match salary {
        Some(s) => Ok(HttpResponse::Ok().json(s)),
        None => Err(ApiError::NotFound("Salary record not found".into())),
    }
}

/// Update Salary. The full body is required and the stored net is recomputed
/// from the new gross and deduction, discarding the prior value.
#[utoipa::path(
    put,
    path = "/api/salaries/{id}",
    params(("id", description = "Salary id")),
    request_body = SalaryInput,
    responses(
        (status = 200, description = "Salary updated, returns the recomputed net"),
        (status = 400, description = "Missing fields"),
        (status = 404, description = "Salary record not found"),
        (status = 401)
    ),
    tag = "Salary"
)]
pub async fn update_salary(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<SalaryInput>,
) -> Result<HttpResponse, ApiError> {
    let salary_id = path.into_inner();
    let month = payload.month_of_payment.trim();

    if month.is_empty() {
        return Err(ApiError::Validation("All fields are required".into()));
    }

    let net_salary = payroll::derive_net_salary(payload.gross_salary, payload.total_deduction);

    let result = sqlx::query(
        r#"
        UPDATE salaries
        SET employee_number = ?, gross_salary = ?, total_deduction = ?,
            net_salary = ?, month_of_payment = ?
        WHERE salary_id = ?
        "#,
    )
    .bind(payload.employee_number)
    .bind(payload.gross_salary)
    .bind(payload.total_deduction)
    .bind(net_salary)
    .bind(month)
    .bind(salary_id)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(done) if done.rows_affected() == 0 => {
            Err(ApiError::NotFound("Salary record not found".into()))
        }
        Ok(_) => {
            info!(user = %auth.username, salary_id, "Salary record updated");
            Ok(HttpResponse::Ok().json(json!({
                "message": "Salary record updated successfully",
                "netSalary": net_salary
            })))
        }
        Err(e) if is_foreign_key_violation(&e) => {
            Err(ApiError::NotFound("Employee not found".into()))
        }
        Err(e) => {
            error!(error = %e, salary_id, "Failed to update salary record");
            Err(ApiError::Internal)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/salaries/{id}",
    params(("id", description = "Salary id")),
    responses(
        (status = 200, description = "Salary deleted"),
        (status = 404, description = "Salary record not found"),
        (status = 401)
    ),
    tag = "Salary"
)]
pub async fn delete_salary(
    auth: AuthUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let salary_id = path.into_inner();

    let result = sqlx::query("DELETE FROM salaries WHERE salary_id = ?")
        .bind(salary_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, salary_id, "Failed to delete salary record");
            ApiError::Internal
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Salary record not found".into()));
    }

    info!(user = %auth.username, salary_id, "Salary record deleted");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Salary record deleted successfully"
    })))
}

/// Monthly payroll report. Without a month filter this returns every salary
/// row across all months, which doubles as the full-export path.
#[utoipa::path(
    get,
    path = "/api/salaries/report/monthly",
    params(PayrollQuery),
    responses(
        (status = 200, description = "Payroll rows ordered by employee name",
         body = [PayrollEntry]),
        (status = 401)
    ),
    tag = "Salary"
)]
pub async fn monthly_payroll(
    pool: web::Data<SqlitePool>,
    query: web::Query<PayrollQuery>,
) -> Result<HttpResponse, ApiError> {
    let base = r#"
        SELECT e.first_name, e.last_name, e.position, d.department_name,
               s.net_salary, s.month_of_payment
        FROM salaries s
        JOIN employees e ON s.employee_number = e.employee_number
        JOIN departments d ON e.department_code = d.department_code
    "#;
    let order = " ORDER BY e.first_name, e.last_name";

    let entries = match &query.month {
        Some(month) => {
            let sql = format!("{base} WHERE s.month_of_payment = ?{order}");
            sqlx::query_as::<_, PayrollEntry>(&sql)
                .bind(month)
                .fetch_all(pool.get_ref())
                .await
        }
        None => {
            let sql = format!("{base}{order}");
            sqlx::query_as::<_, PayrollEntry>(&sql)
                .fetch_all(pool.get_ref())
                .await
        }
    }
    .map_err(|e| {
        error!(error = %e, "Failed to fetch payroll report");
        ApiError::Internal
    })?;

    info!(
        rows = entries.len(),
        total = payroll::total_net(&entries),
        month = query.month.as_deref().unwrap_or("all"),
        "Payroll report generated"
    );

    Ok(HttpResponse::Ok().json(entries))
}
