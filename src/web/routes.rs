// src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Authentication Routes
      .service(
        web::scope("/auth")
          .route(
            "/signup",
            web::post().to(crate::web::handlers::auth_handlers::signup_handler),
          )
          .route(
            "/signin",
            web::post().to(crate::web::handlers::auth_handlers::signin_handler),
          ),
      )
      // Meal Catalog Routes
      .service(
        web::scope("/meals")
          .route(
            "",
            web::get().to(crate::web::handlers::meal_handlers::list_meals_handler),
          )
          .route(
            "/{meal_id}",
            web::get().to(crate::web::handlers::meal_handlers::get_meal_handler),
          ),
      )
      // Order Routes (require an authenticated session)
      .service(
        web::scope("/orders")
          .route(
            "",
            web::post().to(crate::web::handlers::order_handlers::place_order_handler),
          )
          .route(
            "",
            web::get().to(crate::web::handlers::order_handlers::list_orders_handler),
          ),
      ),
  );
}
