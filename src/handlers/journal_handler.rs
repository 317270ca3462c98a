use actix_web::{get, put, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::domain::journal::SlotKind};

#[get("/api/journal/{kind}")]
async fn get_journal_slot(
    state: web::Data<AppState>,
    kind: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let kind = SlotKind::parse(&kind)?;
    let slot = state.journal_service.load_slot(kind)?;
    Ok(HttpResponse::Ok().json(slot))
}

#[put("/api/journal/{kind}")]
async fn put_journal_slot(
    state: web::Data<AppState>,
    kind: web::Path<String>,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    let kind = SlotKind::parse(&kind)?;
    let saved = state
        .journal_service
        .save_slot(kind, payload.into_inner())?;
    Ok(HttpResponse::Ok().json(saved))
}

#[get("/api/stats")]
async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = state.journal_service.stats()?;
    Ok(HttpResponse::Ok().json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::test_utils::fixtures::{canned_provider, test_state};

    macro_rules! journal_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_state(canned_provider("unused"))))
                    .service(get_journal_slot)
                    .service(put_journal_slot)
                    .service(get_stats),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_unknown_slot_kind_is_404() {
        let app = journal_app!();
        let req = test::TestRequest::get().uri("/api/journal/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_put_then_get_round_trips_slot() {
        let app = journal_app!();

        let put = test::TestRequest::put()
            .uri("/api/journal/goals")
            .set_json(serde_json::json!({
                "schema_version": 1,
                "records": [{ "title": "win conference", "category": "season", "target_date": null }],
            }))
            .to_request();
        let saved: serde_json::Value = test::call_and_read_body_json(&app, put).await;
        assert!(!saved["records"][0]["id"].as_str().unwrap().is_empty());

        let get = test::TestRequest::get().uri("/api/journal/goals").to_request();
        let loaded: serde_json::Value = test::call_and_read_body_json(&app, get).await;
        assert_eq!(loaded["records"].as_array().unwrap().len(), 1);
        assert_eq!(loaded["records"][0]["title"], "win conference");
    }

    #[actix_web::test]
    async fn test_put_rejects_unknown_schema_version() {
        let app = journal_app!();
        let req = test::TestRequest::put()
            .uri("/api/journal/goals")
            .set_json(serde_json::json!({ "schema_version": 99, "records": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_stats_on_fresh_store() {
        let app = journal_app!();
        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["sessions_this_week"], 0);
    }
}
