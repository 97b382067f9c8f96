// src/error.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;
use tracing::error;

use crate::shared::shared_structs::GenericResponse;

// Códigos SQLSTATE do PostgreSQL que recebem tratamento próprio
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

// Chave estrangeira sales.product_id -> products.id
pub const SALES_PRODUCT_FKEY: &str = "sales_product_id_fkey";

/// Erros de negócio e de persistência expostos pela API.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Já existe um produto com este nome")]
    DuplicateProductName,

    #[error("Tipo de preço inválido: {0}")]
    InvalidPriceTier(String),

    #[error("Produto com ID {0} não encontrado")]
    ProductNotFound(i32),

    #[error("Quantidade insuficiente em estoque (disponível: {available}, solicitado: {requested})")]
    InsufficientStock { available: i32, requested: i32 },

    #[error("Produto possui vendas registradas e não pode ser excluído")]
    ProductHasSales,

    #[error("Erro de persistência")]
    Persistence(#[source] sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        let code = error
            .as_database_error()
            .and_then(|db| db.code())
            .map(|code| code.into_owned());

        match code.as_deref() {
            Some(UNIQUE_VIOLATION) => Self::DuplicateProductName,
            Some(FOREIGN_KEY_VIOLATION) => {
                // Postgres reporta a tabela referenciada quando a violação
                // vem de um DELETE/UPDATE em products
                let side = foreign_key_side(&error);
                let delete_blocked = side == Some((SALES_PRODUCT_FKEY, "products"));
                let unknown_product = side == Some((SALES_PRODUCT_FKEY, "sales"));

                if delete_blocked {
                    Self::ProductHasSales
                } else if unknown_product {
                    Self::Validation("A venda referencia um produto inexistente".to_string())
                } else {
                    Self::Persistence(error)
                }
            }
            Some(CHECK_VIOLATION) => {
                Self::Validation("Valores violam as restrições do cadastro".to_string())
            }
            _ => Self::Persistence(error),
        }
    }
}

/// Constraint e tabela informadas pelo Postgres para uma violação.
fn foreign_key_side(error: &sqlx::Error) -> Option<(&str, &str)> {
    let pg = error
        .as_database_error()?
        .try_downcast_ref::<PgDatabaseError>()?;

    Some((pg.constraint()?, pg.table()?))
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_)
            | AppError::DuplicateProductName
            | AppError::InvalidPriceTier(_)
            | AppError::InsufficientStock { .. }
            | AppError::ProductHasSales => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Persistence(source) => {
                // O detalhe do banco fica só no log
                error!("falha de persistência: {source}");
                "Erro interno ao acessar o banco de dados".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(GenericResponse::error(message))
    }
}
