// src/main.rs

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use estoque_vendas::config::{build_cors, Config};
use estoque_vendas::store::PgInventoryStore;
use estoque_vendas::{configure, db, AppState};

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Variáveis do arquivo .env, se existir
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estoque_vendas=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::parse();

    // O pool vive durante todo o processo e é fechado no desligamento
    let db_pool = db::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| {
            error!("falha ao conectar ao PostgreSQL: {e}");
            io::Error::new(io::ErrorKind::Other, e)
        })?;

    db::run_migrations(&db_pool).await.map_err(|e| {
        error!("falha ao preparar o esquema: {e}");
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    let app_state = web::Data::new(AppState::new(Arc::new(PgInventoryStore::new(
        db_pool.clone(),
    ))));
    let allowed_origins = config.cors_allowed_origins.clone();

    info!("Iniciando API de estoque e vendas em {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&allowed_origins))
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    db_pool.close().await;
    info!("servidor encerrado");

    Ok(())
}
