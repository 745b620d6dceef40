use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// Employee row joined with its department name (LEFT JOIN: an employee may
/// be unassigned, in which case both department fields are null).
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "employeeNumber": 1,
        "firstName": "John",
        "lastName": "Doe",
        "address": "KN 5 Ave, Kigali",
        "position": "Cashier",
        "telephone": "+250788123456",
        "gender": "Male",
        "hiredDate": "2024-01-01",
        "departmentCode": "CW",
        "departmentName": "Carwash"
    })
)]
pub struct Employee {
    pub employee_number: i64,

    pub first_name: String,

    pub last_name: String,

    pub address: String,

    pub position: String,

    pub telephone: String,

    pub gender: String,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub hired_date: NaiveDate,

    #[schema(nullable = true)]
    pub department_code: Option<String>,

    #[schema(nullable = true)]
    pub department_name: Option<String>,
}
