use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use java2js::api::{configure_routes, configure_static, AppState};
use java2js::banner;
use java2js::config::AppConfig;
use std::time::Duration;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    // A missing .env is fine; the variables may come from the real environment
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = AppConfig::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::other(e.to_string())
    })?;

    let host = app_config.server.host.clone();
    let port = app_config.server.port;
    log::info!("🤖 Using model {}", app_config.gemini.model);

    let state = AppState::new(app_config);
    state.sessions.spawn_reaper(SESSION_SWEEP_INTERVAL);

    println!("🚀 Starting server...");
    println!("📊 Frontend available at http://{}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .configure(configure_static)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
