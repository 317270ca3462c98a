use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::response::HealthResponse};

#[get("/api/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        hosted_provider_configured: state.config.hosted_provider_configured(),
        local_provider_url: state.config.ollama_url.clone(),
    })
}
