// src/products/products_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// Estrutura para receber dados do produto nas requisições POST e PUT.
///
/// O PUT substitui todos os campos; não há atualização parcial.
/// `price` é aceito como sinônimo de `retail_price` (cadastro com preço único).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(alias = "price")]
    pub retail_price: BigDecimal,
    #[serde(default)]
    pub wholesale_price: Option<BigDecimal>,
    pub quantity: i32,
}

impl NewProduct {
    /// Valida o payload antes de tocar no banco.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "O nome do produto é obrigatório".to_string(),
            ));
        }

        let zero = BigDecimal::from(0);
        let negative_wholesale = self
            .wholesale_price
            .as_ref()
            .is_some_and(|price| *price < zero);

        if self.retail_price < zero || negative_wholesale {
            return Err(AppError::Validation(
                "Os preços não podem ser negativos".to_string(),
            ));
        }

        if self.quantity < 0 {
            return Err(AppError::Validation(
                "A quantidade em estoque não pode ser negativa".to_string(),
            ));
        }

        Ok(())
    }
}

/// Estrutura que representa um produto no banco de dados
/// Deriva FromRow para mapeamento direto de resultados de query SQL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub retail_price: BigDecimal,
    pub wholesale_price: Option<BigDecimal>,
    pub quantity: i32,
}

impl Product {
    pub fn from_new(id: i32, item: NewProduct) -> Self {
        Self {
            id,
            name: item.name,
            retail_price: item.retail_price,
            wholesale_price: item.wholesale_price,
            quantity: item.quantity,
        }
    }
}
