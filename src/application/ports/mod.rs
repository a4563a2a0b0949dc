// src/application/ports/mod.rs
pub mod assets;
pub mod time;
