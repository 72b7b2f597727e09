use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use career_match::config::Settings;
use career_match::routes::{self, AppState};
use career_match::services::Catalog;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    match log_format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.compact().init(),
    }

    info!("Starting Career Match service...");

    // Load catalog (optional - requests may carry their own candidates)
    let catalog = match settings.catalog.path.as_deref() {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => {
                info!(
                    "Catalog loaded from {} ({} courses, {} jobs)",
                    path,
                    catalog.courses.len(),
                    catalog.jobs.len()
                );
                catalog
            }
            Err(e) => {
                error!("Failed to load catalog: {}", e);
                return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
            }
        },
        None => {
            warn!("No catalog configured, recommendations require inline candidates");
            Catalog::default()
        }
    };

    info!(
        "Matching limits: default {}, max {}",
        settings.matching.default_limit, settings.matching.max_limit
    );

    let app_state = AppState::new(catalog, settings.matching.clone());

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
