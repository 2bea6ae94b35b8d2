//! Server bootstrap: config, database, seed data, HTTP routes.

use crate::api::handlers;
use crate::config::Config;
use crate::db::{seed, store::CheckinStore};
use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use std::sync::Mutex;

/// Shared application state.
pub struct AppState {
    /// `rusqlite::Connection` is `Send` but not `Sync`, so the store sits
    /// behind a `Mutex`; each request holds it for one short transaction.
    pub store: Mutex<CheckinStore>,
    pub config: Config,
}

/// Starts the check-in API server. The caller provides the async runtime
/// (e.g. via `#[actix_web::main]`).
pub async fn run_server(config_path: Option<&str>, db_override: Option<&str>) -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let mut cfg = Config::load(config_path).expect("Failed to load configuration");
    if let Some(db) = db_override {
        cfg.database = db.to_string();
    }

    log::info!("Opening database {}", cfg.database);
    let store = CheckinStore::open(&cfg.database).expect("Failed to open database");

    if let Some(seed_file) = &cfg.seed_file {
        seed::apply(&store, seed_file).expect("Failed to apply seed file");
    }

    let bind_addr = cfg.bind.clone();
    let port = cfg.port;
    let state = web::Data::new(AppState {
        store: Mutex::new(store),
        config: cfg,
    });

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/action", web::post().to(handlers::action))
                    .route("/report", web::get().to(handlers::report))
                    .route("/nearby", web::get().to(handlers::nearby))
                    .route("/status", web::get().to(handlers::status)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
