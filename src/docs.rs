use crate::api::department::CreateDepartment;
use crate::api::employee::CreateEmployee;
use crate::api::salary::SalaryInput;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::gender::Gender;
use crate::model::salary::Salary;
use crate::models::{LoginReq, RegisterReq};
use crate::payroll::PayrollEntry;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EPMS API",
        version = "1.0.0",
        description = r#"
## Employee Payroll Management System

Cookie-session authenticated API for managing departments, employees and
salary records, with a monthly payroll report.

- **Departments** — fixed-code organizational units with baseline pay figures
- **Employees** — personnel records referencing a department
- **Salaries** — month-tagged pay records; net salary is always derived
  server-side as gross − deduction
- **Reports** — monthly payroll aggregation joined across all three entities

All endpoints except `/api/auth/*` and `/api/health` require a live session.
"#,
    ),
    paths(
        crate::auth::handlers::register,
        crate::auth::handlers::login,
        crate::auth::handlers::logout,
        crate::auth::handlers::session_check,

        crate::api::department::create_department,
        crate::api::department::list_departments,
        crate::api::department::get_department,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,

        crate::api::salary::create_salary,
        crate::api::salary::list_salaries,
        crate::api::salary::get_salary,
        crate::api::salary::update_salary,
        crate::api::salary::delete_salary,
        crate::api::salary::monthly_payroll
    ),
    components(
        schemas(
            RegisterReq,
            LoginReq,
            CreateDepartment,
            Department,
            CreateEmployee,
            Employee,
            Gender,
            SalaryInput,
            Salary,
            PayrollEntry
        )
    ),
    tags(
        (name = "Auth", description = "Session management APIs"),
        (name = "Department", description = "Department management APIs"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Salary", description = "Salary and payroll report APIs"),
    )
)]
pub struct ApiDoc;
