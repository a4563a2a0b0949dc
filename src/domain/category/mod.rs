pub mod entity;
pub mod repository;

pub use entity::{CategoryId, CategorySummary};
pub use repository::CategoryRepository;
