use serde::Serialize;
use utoipa::ToSchema;

/// Net salary derivation: gross − total deduction, rounded to the two decimal
/// places the store carries. Invoked on every Salary create and update; the
/// client never supplies a net figure.
pub fn derive_net_salary(gross: f64, deduction: f64) -> f64 {
    round2(gross - deduction)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One row of the monthly payroll report: Salary joined with Employee and
/// Department, ordered by employee first name then last name.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    #[schema(example = "John")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "Cashier")]
    pub position: String,

    #[schema(example = "Carwash")]
    pub department_name: String,

    #[schema(example = 280000.0)]
    pub net_salary: f64,

    #[schema(example = "2024-01")]
    pub month_of_payment: String,
}

/// Total payroll for a set of report rows. Computed on demand by report
/// consumers, never persisted.
pub fn total_net(entries: &[PayrollEntry]) -> f64 {
    round2(entries.iter().map(|e| e.net_salary).sum())
}
