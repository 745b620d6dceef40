use crate::{
    api::{department, employee, salary},
    auth::{handlers, middleware::auth_middleware},
};
use actix_web::{HttpResponse, Responder, middleware::from_fn, web};
use serde_json::json;

async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "Server is running" }))
}

/// Route tree under /api. Auth endpoints and the health check are public;
/// every other scope sits behind the session gate.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(web::resource("/health").route(web::get().to(health)))
            .service(
                web::scope("/auth")
                    .service(web::resource("/register").route(web::post().to(handlers::register)))
                    .service(web::resource("/login").route(web::post().to(handlers::login)))
                    .service(web::resource("/logout").route(web::post().to(handlers::logout)))
                    .service(
                        web::resource("/session").route(web::get().to(handlers::session_check)),
                    ),
            )
            .service(
                web::scope("/departments")
                    .wrap(from_fn(auth_middleware))
                    .service(
                        web::resource("")
                            .route(web::get().to(department::list_departments))
                            .route(web::post().to(department::create_department)),
                    )
                    .service(
                        web::resource("/{code}").route(web::get().to(department::get_department)),
                    ),
            )
            .service(
                web::scope("/employees")
                    .wrap(from_fn(auth_middleware))
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    .service(web::resource("/{id}").route(web::get().to(employee::get_employee))),
            )
            .service(
                web::scope("/salaries")
                    .wrap(from_fn(auth_middleware))
                    .service(
                        web::resource("")
                            .route(web::get().to(salary::list_salaries))
                            .route(web::post().to(salary::create_salary)),
                    )
                    .service(
                        web::resource("/report/monthly")
                            .route(web::get().to(salary::monthly_payroll)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(salary::get_salary))
                            .route(web::put().to(salary::update_salary))
                            .route(web::delete().to(salary::delete_salary)),
                    ),
            ),
    );
}
