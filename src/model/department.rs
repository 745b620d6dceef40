use serde::Serialize;
use utoipa::ToSchema;

/// Baseline gross salary and deduction are reference values for the unit, not
/// what any particular employee is paid.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[schema(example = "CW")]
    pub department_code: String,

    #[schema(example = "Carwash")]
    pub department_name: String,

    #[schema(example = 300000.0)]
    pub gross_salary: f64,

    #[schema(example = 20000.0)]
    pub total_deduction: f64,
}
