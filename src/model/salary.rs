use serde::Serialize;
use utoipa::ToSchema;

/// Salary row joined with employee and department context. `net_salary` is
/// stored, not recomputed on read: it always equals gross − deduction as of
/// the last write.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    #[schema(example = 1)]
    pub salary_id: i64,

    #[schema(example = 1)]
    pub employee_number: i64,

    #[schema(example = 300000.0)]
    pub gross_salary: f64,

    #[schema(example = 20000.0)]
    pub total_deduction: f64,

    #[schema(example = 280000.0)]
    pub net_salary: f64,

    #[schema(example = "2024-01")]
    pub month_of_payment: String,

    #[schema(example = "John")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "Cashier")]
    pub position: String,

    #[schema(example = "Carwash")]
    pub department_name: String,
}
