// src/sales/mod.rs

// Estruturas de venda (payload, registro e listagem)
pub mod sales_structs;
// Regras de estoque e preço aplicadas ao registrar uma venda
pub mod sale_pricing;
// Rotas HTTP de vendas
pub mod sales_router;
