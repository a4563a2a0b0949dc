// src/application/commands/blogs/mod.rs
mod create;
mod delete;
mod image;
mod service;
mod update;

pub use create::{CreateBlogCommand, CreateBlogCommandBuilder};
pub use delete::DeleteBlogCommand;
pub use service::BlogCommandService;
pub use update::UpdateBlogCommand;
