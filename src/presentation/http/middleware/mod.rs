// src/presentation/http/middleware/mod.rs
pub mod principal;
pub mod rate_limit;
