use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use toq_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let allowed_origin = config.cors_allowed_origin.clone();

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allow_any_method()
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::submit_message)
            .service(handlers::attach_files)
            .service(handlers::get_transcript)
            .service(handlers::get_syllabi)
            .service(handlers::select_syllabus)
            .service(handlers::update_field)
            .service(handlers::save_selected)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
