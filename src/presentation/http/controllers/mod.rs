// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod submissions;
