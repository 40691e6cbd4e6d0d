use std::path::Path;
use std::time::Duration;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use tera::Tera;

use scrape_dashboard::models::config::ServerConfig;
use scrape_dashboard::poller::SummaryPoller;
use scrape_dashboard::repository::http::HttpRepository;
use scrape_dashboard::routes::configure;
use scrape_dashboard::state::DashboardState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load(Path::new("config")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let tera = match Tera::new(&format!("{}/**/*.html", server_config.templates_dir)) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to parse templates: {e}");
            std::process::exit(1);
        }
    };

    let repo = HttpRepository::new(&server_config.api_base_url);
    log::info!("Using scraping backend at {}", repo.base_url());

    let poller = SummaryPoller::start(
        repo.clone(),
        Duration::from_secs(server_config.poll_interval_secs),
    );
    let state = web::Data::new(DashboardState::new(poller.summary()));
    let repo = web::Data::new(repo);
    let tera = web::Data::new(tera);

    let bind_address = (server_config.address.clone(), server_config.port);
    let static_dir = server_config.static_dir.clone();

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/assets", &static_dir))
            .app_data(state.clone())
            .app_data(repo.clone())
            .app_data(tera.clone())
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await;

    poller.stop().await;
    result
}
