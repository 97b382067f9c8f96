// src/products/mod.rs

// Estruturas de produto (payloads e registro do banco)
pub mod products_structs;
// Rotas HTTP do cadastro de produtos
pub mod products_router;
