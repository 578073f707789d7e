use actix_cors::Cors;
use actix_web::{App, HttpServer};
use std::env;

mod route;

#[actix_web::main] // or #[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bind_addr = env::var("FIELDPATH_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    tracing::info!(bind_addr, "starting fieldpath-server");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        App::new().wrap(cors).configure(route::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
