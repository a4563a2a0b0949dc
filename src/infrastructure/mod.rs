pub mod assets;
pub mod database;
pub mod repositories;
pub mod time;
