use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use wrestlewell_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    if !config.hosted_provider_configured() {
        log::warn!("OPENAI_API_KEY not set; hosted coach chat will return 503");
    }
    log::info!("local provider: {} ({})", config.ollama_url, config.ollama_model);

    let state = AppState::from_config(config).expect("failed to initialize application state");

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::hosted_chat)
            .service(handlers::local_chat)
            .service(handlers::generate_quiz)
            .service(handlers::health_check)
            .service(handlers::get_journal_slot)
            .service(handlers::put_journal_slot)
            .service(handlers::get_stats)
    })
    .bind((host, port))?
    .run()
    .await
}
