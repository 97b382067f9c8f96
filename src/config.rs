// src/config.rs

use actix_cors::Cors;
use actix_web::http::{header, Method, Uri};
use clap::Parser;
use tracing::warn;

/// Configuração do servidor, lida da linha de comando ou do ambiente.
#[derive(Debug, Clone, Parser)]
#[command(name = "estoque_vendas", about = "API de estoque e vendas")]
pub struct Config {
    /// String de conexão do PostgreSQL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Origens liberadas para CORS, separadas por vírgula
    #[arg(
        long,
        env = "CORS_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub cors_allowed_origins: Vec<String>,
}

/// Monta o middleware de CORS a partir da lista de origens permitidas.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    for origin in allowed_origins {
        let origin = origin.trim();
        if origin.is_empty() {
            continue;
        }
        if origin == "*" || origin.parse::<Uri>().is_err() {
            warn!("origem CORS inválida ignorada: {origin}");
            continue;
        }
        cors = cors.allowed_origin(origin);
    }

    cors
}
