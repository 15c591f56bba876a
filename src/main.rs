use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use std::sync::Arc;

mod chain;
mod config;
mod errors;
mod handlers;
mod middleware;
mod routes;
use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

use chain::{create_provider, Erc20Reader, RpcErc20Reader};
use config::Config;
use middleware::{security_headers, RateLimiter};
use routes::configure_routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 1. Parse command line arguments and setup logging
    let args = Args::parse();
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    // Pick up a local .env before reading configuration
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    info!("Starting Token Details API...");
    info!("Configuration loaded: {:?}", config);

    config.rpc.validate().expect("Invalid RPC configuration");

    // One provider handle for the whole process; requests only issue
    // read-only calls through it, so sharing is safe.
    let provider = create_provider(&config.rpc.urls).expect("Failed to create RPC provider");
    let reader: Arc<dyn Erc20Reader> = Arc::new(RpcErc20Reader::new(provider));

    // Window state lives outside the factory so all workers share it
    let rate_limiter = RateLimiter::new(&config.rate_limit);

    // Build bind address from config
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    info!("Server will be available at http://{}", bind_addr);

    HttpServer::new(move || {
        // Configure CORS from config; an empty origin list means any
        // origin is accepted
        let allowed_origins = config.cors.allowed_origins.clone();

        let cors = if allowed_origins.is_empty() {
            Cors::permissive()
        } else {
            // Use allowed_origin_fn for more flexible origin matching
            let cors = Cors::default().allowed_origin_fn(move |origin, _req_head| {
                let origin_str = match origin.to_str() {
                    Ok(s) => s,
                    Err(_) => return false,
                };
                allowed_origins.iter().any(|allowed| origin_str == allowed)
            });

            // Convert string methods to HTTP methods
            let methods: Vec<actix_web::http::Method> = config
                .cors
                .allowed_methods
                .iter()
                .filter_map(|m| m.parse().ok())
                .collect();

            let cors = cors
                .allowed_methods(methods)
                .allowed_headers(config.cors.allowed_headers.clone())
                .max_age(3600);

            if config.cors.supports_credentials {
                cors.supports_credentials()
            } else {
                cors
            }
        };

        App::new()
            .app_data(web::Data::new(reader.clone()))
            .wrap(rate_limiter.clone())
            .wrap(cors)
            .wrap(security_headers())
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
