use actix_web::{middleware::Logger, web, App, HttpServer};

use interaction_style_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config.clone()).map_err(|e| std::io::Error::other(e.to_string()))?;

    let (host, port) = config.bind_address();
    log::info!("starting HTTP server on {}:{}", host, port);
    log::info!(
        "model {} at {}, credential configured: {}",
        config.gemini_model,
        config.gemini_base_url,
        config.has_generation_credential()
    );

    let allowed_origins = config.allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors(&allowed_origins))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
