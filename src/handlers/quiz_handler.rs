use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::GenerateQuizRequest, response::GenerateQuizResponse},
};

#[post("/api/quiz/generate")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let (topic, difficulty) = request.resolved();
    let batch = state.quiz_service.generate(&topic, &difficulty).await;
    Ok(HttpResponse::Ok().json(GenerateQuizResponse::from(batch)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::test_utils::fixtures::{canned_provider, test_state, unreachable_provider};

    #[actix_web::test]
    async fn test_generate_quiz_parses_provider_array() {
        let provider = canned_provider(
            r#"[{"question":"Q1","options":["a","b","c","d"],"correctIndex":2,"explanation":"e"}]"#,
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(provider)))
                .service(generate_quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/generate")
            .set_json(serde_json::json!({ "topic": "cradles", "difficulty": "Beginner" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["offline"], false);
        assert_eq!(body["questions"][0]["correctIndex"], 2);
        assert_eq!(body["questions"][0]["id"], "ai-0");
    }

    #[actix_web::test]
    async fn test_generate_quiz_falls_back_offline() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(unreachable_provider())))
                .service(generate_quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/generate")
            .set_json(serde_json::json!({}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["offline"], true);
        assert_eq!(body["questions"].as_array().unwrap().len(), 3);
        assert_eq!(body["questions"][0]["id"], "fb-0");
        // Defaulted topic shows up in the interpolated fallback question.
        assert!(body["questions"][0]["question"]
            .as_str()
            .unwrap()
            .contains("folkstyle neutral"));
    }
}
