use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{HostedChatRequest, LocalChatRequest},
        response::{HostedChatResponse, LocalChatResponse},
    },
};

#[post("/api/coach/chat")]
async fn hosted_chat(
    state: web::Data<AppState>,
    request: web::Json<HostedChatRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let request = request.into_inner();
    let reply = state
        .coach_service
        .hosted_chat(&request.message, &request.history)
        .await?;
    Ok(HttpResponse::Ok().json(HostedChatResponse::from(reply)))
}

#[post("/api/coach/chat/local")]
async fn local_chat(
    state: web::Data<AppState>,
    request: web::Json<LocalChatRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let reply = state.coach_service.local_chat(&request.message).await;
    Ok(HttpResponse::Ok().json(LocalChatResponse::from(reply)))
}
