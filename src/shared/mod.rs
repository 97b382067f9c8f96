// src/shared/mod.rs

// Estruturas compartilhadas entre os módulos de produtos e vendas
pub mod shared_structs;
