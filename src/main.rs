use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use thinkcheck_server::{
    app_state::AppState,
    config::Config,
    handlers::{configure, json_config},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    config.log_warnings();

    let (host, port) = (config.web_server_host.clone(), config.web_server_port);
    let payload_limit = config.json_payload_limit;

    let state = AppState::new(config).map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("Starting HTTP server on {}:{}", host, port);
    log::info!("Use /test-connection to check the completion service connection");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config(payload_limit))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
