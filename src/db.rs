use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// Schema statements, each idempotent. Department and Employee rows are never
/// deleted by the application; Salary rows can be.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS departments (
        department_code TEXT PRIMARY KEY,
        department_name TEXT NOT NULL,
        gross_salary REAL NOT NULL,
        total_deduction REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        employee_number INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        address TEXT NOT NULL,
        position TEXT NOT NULL,
        telephone TEXT NOT NULL,
        gender TEXT NOT NULL,
        hired_date TEXT NOT NULL,
        department_code TEXT REFERENCES departments (department_code)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS salaries (
        salary_id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_number INTEGER NOT NULL REFERENCES employees (employee_number),
        gross_salary REAL NOT NULL,
        total_deduction REAL NOT NULL,
        net_salary REAL NOT NULL,
        month_of_payment TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_salaries_employee ON salaries (employee_number)",
    "CREATE INDEX IF NOT EXISTS idx_salaries_month ON salaries (month_of_payment)",
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sessions (
        token TEXT PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users (id),
        username TEXT NOT NULL,
        expires_at INTEGER NOT NULL
    )
    "#,
];

/// The four fixed departments, inserted if absent on every startup.
const SEED_DEPARTMENTS: &[(&str, &str, f64, f64)] = &[
    ("CW", "Carwash", 300_000.0, 20_000.0),
    ("ST", "Stock", 200_000.0, 5_000.0),
    ("MC", "Mechanic", 450_000.0, 40_000.0),
    ("ADMS", "Administration Staff", 600_000.0, 70_000.0),
];

pub async fn init_db(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database exists per connection; cap the pool at one so
    // every handle sees the same data.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    for statement in SCHEMA {
        sqlx::query(statement).execute(&pool).await?;
    }

    for (code, name, gross, deduction) in SEED_DEPARTMENTS {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO departments
            (department_code, department_name, gross_salary, total_deduction)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(gross)
        .bind(deduction)
        .execute(&pool)
        .await?;
    }

    info!("Database initialized");

    Ok(pool)
}
